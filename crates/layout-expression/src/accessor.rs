//! Read/write bindings to state owned outside the interpreter.

/// A named numeric value that lives outside the interpreter.
///
/// Reading the accessor's name in an expression calls [`Accessor::get`];
/// assigning to it calls [`Accessor::set`].
pub trait Accessor {
    fn get(&self) -> f64;
    fn set(&mut self, value: f64);
}

/// An [`Accessor`] made of a getter closure and a setter closure.
pub struct FnAccessor<G, S> {
    getter: G,
    setter: S,
}

impl<G, S> FnAccessor<G, S>
where
    G: Fn() -> f64,
    S: FnMut(f64),
{
    pub fn new(getter: G, setter: S) -> Self {
        FnAccessor { getter, setter }
    }
}

impl<G, S> Accessor for FnAccessor<G, S>
where
    G: Fn() -> f64,
    S: FnMut(f64),
{
    fn get(&self) -> f64 {
        (self.getter)()
    }

    fn set(&mut self, value: f64) {
        (self.setter)(value)
    }
}
