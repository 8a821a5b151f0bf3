use super::node_type::Align;

/// A borrowed view of one node-type field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRef<'a> {
    U32(u32),
    Bool(bool),
    Str(&'a str),
    Aligns(&'a [Align]),
}

/// A mutable handle to one node-type field.
#[derive(Debug)]
pub enum FieldMut<'a> {
    U32(&'a mut u32),
    Bool(&'a mut bool),
    Str(&'a mut String),
    Aligns(&'a mut Vec<Align>),
}

impl FieldMut<'_> {
    /// Copies `value` into this field if the shapes agree, returning whether
    /// anything was written.
    pub fn assign(&mut self, value: FieldRef<'_>) -> bool {
        match (self, value) {
            (FieldMut::U32(dst), FieldRef::U32(v)) => **dst = v,
            (FieldMut::Bool(dst), FieldRef::Bool(v)) => **dst = v,
            (FieldMut::Str(dst), FieldRef::Str(v)) => {
                dst.clear();
                dst.push_str(v);
            }
            (FieldMut::Aligns(dst), FieldRef::Aligns(v)) => {
                dst.clear();
                dst.extend_from_slice(v);
            }
            _ => return false,
        }
        true
    }
}
