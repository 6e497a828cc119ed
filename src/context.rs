/// How many directories an upward walk has climbed so far.
#[derive(Debug, Default)]
pub struct Depth(u16);

impl Depth {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn increase(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    pub fn value(&self) -> u16 {
        self.0
    }
}
