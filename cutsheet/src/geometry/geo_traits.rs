/// Trait for types that can detect collisions between `self` and `T`.
pub trait CollidesWith<T> {
    fn collides_with(&self, other: &T) -> bool;
}

/// Trait for types that can be checked to fully enclose `T`.
pub trait Contains<T> {
    fn contains(&self, other: &T) -> bool;
}
