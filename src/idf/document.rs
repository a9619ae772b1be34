use super::objects::{IdfObject, Version};
use std::cell::RefCell;
use std::rc::Rc;

/// Handle shared by every converter of one run.
pub type SharedDocument = Rc<RefCell<IdfDocument>>;

/// In-memory IDF model. Objects can only be appended.
#[derive(Debug, Clone, PartialEq)]
pub struct IdfDocument {
    objects: Vec<IdfObject>,
}

impl IdfDocument {
    pub fn new(version: &str) -> Self {
        Self {
            objects: vec![IdfObject::Version(Version {
                identifier: version.to_string(),
            })],
        }
    }

    pub fn shared(version: &str) -> SharedDocument {
        Rc::new(RefCell::new(Self::new(version)))
    }

    pub fn add(&mut self, object: impl Into<IdfObject>) -> &IdfObject {
        self.objects.push(object.into());
        &self.objects[self.objects.len() - 1]
    }

    pub fn objects(&self) -> &[IdfObject] {
        &self.objects
    }

    pub fn objects_of<'a>(&'a self, class: &'a str) -> impl Iterator<Item = &'a IdfObject> + 'a {
        self.objects
            .iter()
            .filter(move |object| object.class_name().eq_ignore_ascii_case(class))
    }

    pub fn count(&self, class: &str) -> usize {
        self.objects_of(class).count()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn version(&self) -> Option<&str> {
        self.objects.iter().find_map(|object| match object {
            IdfObject::Version(v) => Some(v.identifier.as_str()),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::idf::objects::{Building, CLASS_BUILDING};

    #[test]
    fn test_new_document_carries_version() {
        let doc = IdfDocument::new("9.4");
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.version(), Some("9.4"));
        assert_eq!(doc.count("version"), 1);
    }

    #[test]
    fn test_add_and_query_by_class() {
        let mut doc = IdfDocument::new("9.4");
        let added = doc.add(Building::builder("Tower A").build().unwrap());
        assert_eq!(added.name(), Some("Tower A"));

        assert_eq!(doc.count(CLASS_BUILDING), 1);
        assert_eq!(doc.count("Building"), 1);
        assert_eq!(doc.count("SITE:LOCATION"), 0);
    }
}
