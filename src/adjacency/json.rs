use super::{Adjacency, Successors};
use crate::walk::Walk;
use serde_json::{map, Value};
use std::convert::Infallible;
use std::fmt;

/// The label of an arc from a JSON container to one of its elements.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Key<'v> {
    /// The position of an element in an array.
    Index(usize),
    /// The name of a member of an object.
    Name(&'v str),
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(index) => write!(f, "{index}"),
            Key::Name(name) => f.write_str(name),
        }
    }
}

/// The adjacency function of JSON documents.
///
/// Vertices are borrowed [values](Value): the successors of an array are its
/// elements, labelled by [position](Key::Index), and the successors of an
/// object are its members, labelled by [name](Key::Name), in the order of
/// the object. All other values have no successors, so they, and empty
/// containers, are the leaves of the document.
///
/// # Examples
///
/// ```
/// use graph_walks::adjacency::{json_pointer, JsonAdjacency};
/// use graph_walks::algo::traversal::Traversal;
/// use serde_json::json;
///
/// let document = json!({"a": [1, {"b": null}], "c": {}});
/// let traversal = Traversal::leaves(&document, JsonAdjacency);
/// let pointers = traversal
///     .into_iter()
///     .map(|walk| walk.map(|walk| json_pointer(&walk)))
///     .collect::<Result<Vec<_>, _>>()
///     .unwrap();
/// assert_eq!(pointers, vec!["/a/0", "/a/1/b", "/c"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonAdjacency;

/// The successors of a JSON value.
///
/// The shape of the value is examined once, when the successors are
/// created.
pub enum JsonSuccessors<'v> {
    Array {
        from: &'v Value,
        elements: std::iter::Enumerate<std::slice::Iter<'v, Value>>,
    },
    Object {
        from: &'v Value,
        members: map::Iter<'v>,
    },
    Scalar,
}

impl<'v> Successors<&'v Value, Key<'v>> for JsonSuccessors<'v> {
    type Error = Infallible;

    fn next_walk(&mut self) -> Option<Result<Walk<&'v Value, Key<'v>>, Infallible>> {
        let walk = match self {
            JsonSuccessors::Array { from, elements } => {
                let (index, element) = elements.next()?;
                Walk::step(*from, element, Key::Index(index))
            }
            JsonSuccessors::Object { from, members } => {
                let (name, member) = members.next()?;
                Walk::step(*from, member, Key::Name(name.as_str()))
            }
            JsonSuccessors::Scalar => return None,
        };
        Some(Ok(walk))
    }
}

impl<'v> Adjacency<&'v Value, Key<'v>> for JsonAdjacency {
    type Error = Infallible;
    type Successors<'a>
        = JsonSuccessors<'v>
    where
        Self: 'a;

    fn successors(&self, &value: &&'v Value) -> Result<JsonSuccessors<'v>, Infallible> {
        Ok(match value {
            Value::Array(elements) => JsonSuccessors::Array {
                from: value,
                elements: elements.iter().enumerate(),
            },
            Value::Object(members) => JsonSuccessors::Object {
                from: value,
                members: members.iter(),
            },
            _ => JsonSuccessors::Scalar,
        })
    }
}

/// Returns the [JSON pointer](https://www.rfc-editor.org/rfc/rfc6901) of the
/// value reached by a walk starting from the root of a document.
pub fn json_pointer<V>(walk: &Walk<V, Key<'_>>) -> String {
    let mut pointer = String::new();
    for key in walk.labels() {
        pointer.push('/');
        match key {
            Key::Index(index) => pointer.push_str(&index.to_string()),
            Key::Name(name) => pointer.push_str(&name.replace('~', "~0").replace('/', "~1")),
        }
    }
    pointer
}
