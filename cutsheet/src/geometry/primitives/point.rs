/// Geometric primitive representing a point
#[derive(Debug, Clone, PartialEq, Copy)]
pub struct Point(pub f32, pub f32);

impl Point {
    #[inline(always)]
    pub fn x(&self) -> f32 {
        self.0
    }

    #[inline(always)]
    pub fn y(&self) -> f32 {
        self.1
    }
}
