// Implemented by everything whose state can be put on hold. While frozen, an
// object rejects any change to its state until it is unfrozen again.
pub trait Freezeable {
    fn freeze(&mut self);
    fn unfreeze(&mut self);
}
