//! Frontend Models

/// One shopping-list entry
///
/// The id exists so row keys and the drag gesture can address the specific
/// row the user acted on; two items may share a name.
#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingItem {
    pub id: u32,
    pub name: String,
    pub purchased: bool,
}
