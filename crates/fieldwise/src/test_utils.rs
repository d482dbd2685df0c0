//! Fixture types shared by the unit tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::attributes::{AttrDescriptor, AttrKind, AttrValue, Inspect, Nested, NestedMut, Slot};
use crate::error::AttrError;

const WIDGET_ATTRS: &[AttrDescriptor] = &[
    AttrDescriptor::new("name", AttrKind::Text),
    AttrDescriptor::new("tag", AttrKind::Text).search_ignore(),
    AttrDescriptor::new("count", AttrKind::Int),
    AttrDescriptor::new("labels", AttrKind::List),
    AttrDescriptor::new("child", AttrKind::Object),
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Widget {
    pub name: Option<String>,
    pub tag: Option<String>,
    pub count: Option<i64>,
    pub labels: Option<Vec<String>>,
    pub child: Option<Part>,
}

impl Widget {
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::default()
        }
    }
}

impl Inspect for Widget {
    fn type_name(&self) -> &str {
        "Widget"
    }

    fn attributes(&self) -> Vec<AttrDescriptor> {
        WIDGET_ATTRS.to_vec()
    }

    fn get_attr(&self, name: &str) -> Result<Slot<'_>, AttrError> {
        match name {
            "name" => Ok(self.name.clone().into()),
            "tag" => Ok(self.tag.clone().into()),
            "count" => Ok(self.count.into()),
            "labels" => Ok(self.labels.clone().into()),
            "child" => Ok(Slot::object(self.child.as_ref())),
            _ => Err(AttrError::unknown(name)),
        }
    }

    fn set_attr(&mut self, name: &str, value: AttrValue) -> Result<(), AttrError> {
        match name {
            "name" => self.name = Some(value.try_text(name)?),
            "tag" => self.tag = Some(value.try_text(name)?),
            "count" => self.count = Some(value.try_int(name)?),
            "labels" => self.labels = Some(value.try_strings(name)?),
            _ => return Err(AttrError::unknown(name)),
        }
        Ok(())
    }

    fn nested_mut(&mut self, name: &str) -> Option<NestedMut<'_>> {
        match name {
            "child" => Some(NestedMut::Borrowed(
                self.child.get_or_insert_with(Part::default),
            )),
            _ => None,
        }
    }
}

const PART_ATTRS: &[AttrDescriptor] = &[
    AttrDescriptor::new("name", AttrKind::Text),
    AttrDescriptor::new("serial", AttrKind::Int),
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Part {
    pub name: Option<String>,
    pub serial: Option<i64>,
}

impl Part {
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            serial: None,
        }
    }
}

impl Inspect for Part {
    fn type_name(&self) -> &str {
        "Part"
    }

    fn attributes(&self) -> Vec<AttrDescriptor> {
        PART_ATTRS.to_vec()
    }

    fn get_attr(&self, name: &str) -> Result<Slot<'_>, AttrError> {
        match name {
            "name" => Ok(self.name.clone().into()),
            "serial" => Ok(self.serial.into()),
            _ => Err(AttrError::unknown(name)),
        }
    }

    fn set_attr(&mut self, name: &str, value: AttrValue) -> Result<(), AttrError> {
        match name {
            "name" => self.name = Some(value.try_text(name)?),
            "serial" => self.serial = Some(value.try_int(name)?),
            _ => return Err(AttrError::unknown(name)),
        }
        Ok(())
    }
}

/// Marked at the type level; also declares a write-only attribute.
#[derive(Debug, Clone, Default)]
pub struct Secret {
    pub code: Option<String>,
}

impl Inspect for Secret {
    fn type_name(&self) -> &str {
        "Secret"
    }

    fn attributes(&self) -> Vec<AttrDescriptor> {
        vec![
            AttrDescriptor::new("code", AttrKind::Text),
            AttrDescriptor::new("password", AttrKind::Text).write_only(),
        ]
    }

    fn get_attr(&self, name: &str) -> Result<Slot<'_>, AttrError> {
        match name {
            "code" => Ok(self.code.clone().into()),
            _ => Err(AttrError::unknown(name)),
        }
    }

    fn search_ignored(&self) -> bool {
        true
    }
}

/// `broken` always fails to read.
#[derive(Debug, Clone, Default)]
pub struct Flaky {
    pub ok: Option<String>,
}

impl Inspect for Flaky {
    fn type_name(&self) -> &str {
        "Flaky"
    }

    fn attributes(&self) -> Vec<AttrDescriptor> {
        vec![
            AttrDescriptor::new("ok", AttrKind::Text),
            AttrDescriptor::new("broken", AttrKind::Text),
        ]
    }

    fn get_attr(&self, name: &str) -> Result<Slot<'_>, AttrError> {
        match name {
            "ok" => Ok(self.ok.clone().into()),
            "broken" => Err(AttrError::failed(name, "getter blew up")),
            _ => Err(AttrError::unknown(name)),
        }
    }

    fn set_attr(&mut self, name: &str, value: AttrValue) -> Result<(), AttrError> {
        match name {
            "ok" => self.ok = Some(value.try_text(name)?),
            "broken" => return Err(AttrError::failed(name, "setter blew up")),
            _ => return Err(AttrError::unknown(name)),
        }
        Ok(())
    }
}

/// Counts attribute reads.
#[derive(Debug)]
pub struct Probe {
    first: String,
    second: String,
    reads: Cell<usize>,
}

impl Probe {
    pub fn new(first: &str, second: &str) -> Self {
        Self {
            first: first.to_string(),
            second: second.to_string(),
            reads: Cell::new(0),
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.get()
    }
}

impl Inspect for Probe {
    fn type_name(&self) -> &str {
        "Probe"
    }

    fn attributes(&self) -> Vec<AttrDescriptor> {
        vec![
            AttrDescriptor::new("first", AttrKind::Text),
            AttrDescriptor::new("second", AttrKind::Text),
        ]
    }

    fn get_attr(&self, name: &str) -> Result<Slot<'_>, AttrError> {
        self.reads.set(self.reads.get() + 1);
        match name {
            "first" => Ok(AttrValue::from(self.first.as_str()).into()),
            "second" => Ok(AttrValue::from(self.second.as_str()).into()),
            _ => Err(AttrError::unknown(name)),
        }
    }
}

/// `id` is read-only.
#[derive(Debug, Clone, Default)]
pub struct Sealed {
    pub id: Option<i64>,
    pub note: Option<String>,
}

impl Inspect for Sealed {
    fn type_name(&self) -> &str {
        "Sealed"
    }

    fn attributes(&self) -> Vec<AttrDescriptor> {
        vec![
            AttrDescriptor::new("id", AttrKind::Int).read_only(),
            AttrDescriptor::new("note", AttrKind::Text),
        ]
    }

    fn get_attr(&self, name: &str) -> Result<Slot<'_>, AttrError> {
        match name {
            "id" => Ok(self.id.into()),
            "note" => Ok(self.note.clone().into()),
            _ => Err(AttrError::unknown(name)),
        }
    }

    fn set_attr(&mut self, name: &str, value: AttrValue) -> Result<(), AttrError> {
        match name {
            "note" => self.note = Some(value.try_text(name)?),
            "id" => return Err(AttrError::read_only(name)),
            _ => return Err(AttrError::unknown(name)),
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct NodeData {
    pub label: Option<String>,
    pub next: Option<Rc<RefCell<NodeData>>>,
}

/// Shared handle into a possibly cyclic graph.
#[derive(Debug, Clone)]
pub struct Node(pub Rc<RefCell<NodeData>>);

impl Node {
    /// A node whose `next` points back at itself.
    pub fn looped(label: &str) -> Self {
        let rc = Rc::new(RefCell::new(NodeData {
            label: Some(label.to_string()),
            next: None,
        }));
        rc.borrow_mut().next = Some(Rc::clone(&rc));
        Node(rc)
    }

    pub fn label(&self) -> Option<String> {
        self.0.borrow().label.clone()
    }
}

impl Inspect for Node {
    fn type_name(&self) -> &str {
        "Node"
    }

    fn attributes(&self) -> Vec<AttrDescriptor> {
        vec![
            AttrDescriptor::new("label", AttrKind::Text),
            AttrDescriptor::new("next", AttrKind::Object),
        ]
    }

    fn get_attr(&self, name: &str) -> Result<Slot<'_>, AttrError> {
        match name {
            "label" => Ok(self.label().into()),
            "next" => {
                let next = self.0.borrow().next.clone();
                Ok(match next {
                    Some(rc) => Slot::Nested(Nested::Owned(Box::new(Node(rc)))),
                    None => Slot::Null,
                })
            }
            _ => Err(AttrError::unknown(name)),
        }
    }

    fn set_attr(&mut self, name: &str, value: AttrValue) -> Result<(), AttrError> {
        match name {
            "label" => self.0.borrow_mut().label = Some(value.try_text(name)?),
            _ => return Err(AttrError::unknown(name)),
        }
        Ok(())
    }

    fn nested_mut(&mut self, name: &str) -> Option<NestedMut<'_>> {
        match name {
            "next" => {
                let next = self.0.borrow().next.clone()?;
                Some(NestedMut::Owned(Box::new(Node(next))))
            }
            _ => None,
        }
    }
}
