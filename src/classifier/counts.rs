use super::Shape;

/// How many samples matched each shape during one classification call.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ClassificationCounts {
    pub float: usize,
    pub numeric: usize,
    pub integer: usize,
    pub date: usize,
    pub text: usize,
}

impl ClassificationCounts {
    pub fn record(&mut self, shape: Shape) {
        match shape {
            Shape::Float => self.float += 1,
            Shape::Numeric => self.numeric += 1,
            Shape::Integer => self.integer += 1,
            Shape::Date => self.date += 1,
            Shape::Text => self.text += 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.float + self.numeric + self.integer + self.date + self.text == 0
    }

    pub fn has_numeric_like(&self) -> bool {
        self.float + self.numeric + self.integer > 0
    }
}
