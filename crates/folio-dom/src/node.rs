//! Element tree nodes and the element builder.

use std::fmt;
use std::sync::Arc;

/// Event passed to listeners registered on an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Event name without the `on` prefix (e.g. `"click"`).
    pub name: String,
}

impl Event {
    /// Create an event with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

type Handler = dyn Fn(&Event) + Send + Sync;

/// Callable registered for a named event.
///
/// Listeners are kept on the element but never serialized.
#[derive(Clone)]
pub struct Listener(Arc<Handler>);

impl Listener {
    /// Wrap a closure as a listener.
    pub fn new(handler: impl Fn(&Event) + Send + Sync + 'static) -> Self {
        Self(Arc::new(handler))
    }

    fn call(&self, event: &Event) {
        (self.0)(event);
    }
}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Listener")
    }
}

/// Attribute value accepted by [`el`].
///
/// The builder switches on the variant: text becomes an attribute (or the
/// class name for `class`), a listener is bound to the event named by the
/// key, and an absent value is skipped.
#[derive(Debug, Clone)]
pub enum AttrValue {
    /// Literal attribute value.
    Text(String),
    /// No value; the attribute is not rendered at all.
    Absent,
    /// Event binding.
    Listener(Listener),
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

impl From<Listener> for AttrValue {
    fn from(listener: Listener) -> Self {
        Self::Listener(listener)
    }
}

/// Tree node: an element or a text fragment.
#[derive(Debug, Clone)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    /// Return the element if this node is one.
    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }

    /// Concatenated text of this node and its descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        match self {
            Self::Element(element) => element.text_content(),
            Self::Text(text) => text.clone(),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Element with ordered attributes, children and event listeners.
#[derive(Debug, Clone)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
    listeners: Vec<(String, Listener)>,
}

impl Element {
    /// Create an empty element.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
            listeners: Vec::new(),
        }
    }

    /// Tag name.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Value of the `id` attribute.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.attribute("id")
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Attributes in insertion order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Set an attribute, replacing any previous value in place.
    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attrs.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value,
            None => self.attrs.push((name.to_owned(), value)),
        }
    }

    pub fn remove_attribute(&mut self, name: &str) {
        self.attrs.retain(|(key, _)| key != name);
    }

    #[must_use]
    pub fn class_name(&self) -> &str {
        self.attribute("class").unwrap_or_default()
    }

    pub fn set_class_name(&mut self, class: impl Into<String>) {
        self.set_attribute("class", class);
    }

    /// Read a single declaration from the inline `style` attribute.
    #[must_use]
    pub fn style_property(&self, property: &str) -> Option<&str> {
        parse_style(self.attribute("style")?)
            .into_iter()
            .find(|(name, _)| *name == property)
            .map(|(_, value)| value)
    }

    /// Set a single declaration in the inline `style` attribute, keeping the
    /// other declarations.
    pub fn set_style_property(&mut self, property: &str, value: &str) {
        let mut declarations: Vec<(String, String)> = self
            .attribute("style")
            .map(parse_style)
            .unwrap_or_default()
            .into_iter()
            .map(|(name, value)| (name.to_owned(), value.to_owned()))
            .collect();

        match declarations.iter_mut().find(|(name, _)| name == property) {
            Some((_, existing)) => value.clone_into(existing),
            None => declarations.push((property.to_owned(), value.to_owned())),
        }

        let style = declarations
            .iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect::<Vec<_>>()
            .join("; ");
        self.set_attribute("style", style);
    }

    /// Register a listener for the named event.
    pub fn add_event_listener(&mut self, event: impl Into<String>, listener: Listener) {
        self.listeners.push((event.into(), listener));
    }

    /// Invoke every listener registered for `event`, in registration order.
    ///
    /// Returns the number of listeners called.
    pub fn dispatch(&self, event: &Event) -> usize {
        let mut called = 0;
        for (name, listener) in &self.listeners {
            if *name == event.name {
                listener.call(event);
                called += 1;
            }
        }
        called
    }

    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Child elements, skipping text nodes.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    pub fn append(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    /// Append text, extending the last child when it is already text.
    pub(crate) fn push_text(&mut self, text: &str) {
        if let Some(Node::Text(last)) = self.children.last_mut() {
            last.push_str(text);
        } else {
            self.children.push(Node::Text(text.to_owned()));
        }
    }

    pub fn clear_children(&mut self) {
        self.children.clear();
    }

    /// Replace all children with a single text node (none for empty text).
    pub fn set_text_content(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.children.clear();
        if !text.is_empty() {
            self.children.push(Node::Text(text));
        }
    }

    #[must_use]
    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }

    /// Find this element or a descendant by `id`.
    #[must_use]
    pub fn element_by_id(&self, id: &str) -> Option<&Element> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.child_elements()
            .find_map(|child| child.element_by_id(id))
    }

    /// Find this element or a descendant by `id`, mutably.
    pub fn element_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|child| match child {
            Node::Element(element) => element.element_by_id_mut(id),
            Node::Text(_) => None,
        })
    }

    /// Descendants with the given tag, in document order.
    #[must_use]
    pub fn descendants_by_tag(&self, tag: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_by_tag(tag, &mut found);
        found
    }

    fn collect_by_tag<'a>(&'a self, tag: &str, found: &mut Vec<&'a Element>) {
        for child in self.child_elements() {
            if child.tag == tag {
                found.push(child);
            }
            child.collect_by_tag(tag, found);
        }
    }

    /// Visit every descendant with tag `tag` that sits inside an element
    /// with tag `ancestor` (the `ancestor tag` selector).
    pub fn for_each_within_mut<F>(&mut self, ancestor: &str, tag: &str, mut visit: F)
    where
        F: FnMut(&mut Element),
    {
        self.walk_within(ancestor, tag, false, &mut visit);
    }

    fn walk_within<F>(&mut self, ancestor: &str, tag: &str, inside: bool, visit: &mut F)
    where
        F: FnMut(&mut Element),
    {
        let inside = inside || self.tag == ancestor;
        for child in &mut self.children {
            if let Node::Element(child) = child {
                if inside && child.tag == tag {
                    visit(child);
                }
                child.walk_within(ancestor, tag, inside, visit);
            }
        }
    }
}

/// Build an element from a tag, attributes and children.
///
/// `class` sets the class name, [`AttrValue::Listener`] values are bound to
/// the event named by the key (an `on` prefix is stripped), and
/// [`AttrValue::Absent`] values are dropped. Children are appended in order.
pub fn el<K, A, C>(tag: &str, attrs: A, children: C) -> Element
where
    K: AsRef<str>,
    A: IntoIterator<Item = (K, AttrValue)>,
    C: IntoIterator<Item = Node>,
{
    let mut element = Element::new(tag);
    for (key, value) in attrs {
        let key = key.as_ref();
        match value {
            AttrValue::Text(text) if key == "class" => element.set_class_name(text),
            AttrValue::Text(text) => element.set_attribute(key, text),
            AttrValue::Listener(listener) => {
                let event = key.strip_prefix("on").unwrap_or(key);
                element.add_event_listener(event, listener);
            }
            AttrValue::Absent => {}
        }
    }
    element.children.extend(children);
    element
}

/// Split an inline style into `(property, value)` pairs.
fn parse_style(style: &str) -> Vec<(&str, &str)> {
    style
        .split(';')
        .filter_map(|decl| {
            let (name, value) = decl.split_once(':')?;
            let name = name.trim();
            (!name.is_empty()).then(|| (name, value.trim()))
        })
        .collect()
}
