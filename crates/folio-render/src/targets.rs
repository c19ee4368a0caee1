//! Element ids of the containers a page skeleton provides.
//!
//! Every target is optional; renderers skip the ones a page does not have.

pub const PERSON_NAME: &str = "personName";
pub const PERSON_TAGLINE: &str = "personTagline";
/// Second copy of the name, e.g. in a hero block.
pub const PERSON_NAME_SECONDARY: &str = "personName2";
pub const PERSON_TAGLINE_SECONDARY: &str = "personTagline2";
pub const PERSON_NAME_FOOTER: &str = "personNameFooter";
pub const INTRO_TEXT: &str = "introText";
pub const AVATAR_IMG: &str = "avatarImg";
pub const CONTACT_BLOCK: &str = "contactBlock";
pub const PILL_ROW: &str = "pillRow";

pub const NEWS_LIST: &str = "newsList";
pub const EDUCATION_LIST: &str = "educationList";
pub const EMPLOYMENT_LIST: &str = "employmentList";
pub const PUBLICATION_LIST: &str = "pubList";
pub const SCHOLAR_LINK: &str = "scholarLink";

pub const YEAR: &str = "year";
pub const ERROR_BOX: &str = "errorBox";
