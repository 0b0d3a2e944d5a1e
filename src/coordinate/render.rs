//! Rendering as `Name({'x': 1, 'y': 2})`, keys in resolved order

use super::Coordinate;
use crate::space::KeySpace;
use std::fmt;

impl<V, S: KeySpace> Coordinate<V, S> {
    fn render(
        &self,
        f: &mut fmt::Formatter<'_>,
        value: fn(&V, &mut fmt::Formatter<'_>) -> fmt::Result,
    ) -> fmt::Result {
        write!(f, "{}({{", S::NAME)?;
        let order = self.order();
        let mut first = true;
        for key in order.iter() {
            let Some(v) = self.store().get(key) else {
                continue;
            };
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            write!(f, "'{}': ", key)?;
            value(v, f)?;
        }
        write!(f, "}})")
    }
}

impl<V: fmt::Debug, S: KeySpace> fmt::Debug for Coordinate<V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, |v, f| fmt::Debug::fmt(v, f))
    }
}

impl<V: fmt::Display, S: KeySpace> fmt::Display for Coordinate<V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, |v, f| fmt::Display::fmt(v, f))
    }
}

#[cfg(test)]
mod tests {
    use crate::Coordinate;

    #[test]
    fn test_render_uses_resolved_order() {
        let c = Coordinate::new([("x", 1), ("y", 2)]).with_order("xy").unwrap();
        assert_eq!(format!("{}", c), "Coordinate({'x': 1, 'y': 2})");
        assert_eq!(format!("{:?}", c), "Coordinate({'x': 1, 'y': 2})");

        let c = Coordinate::new([("b", 0.5)]);
        assert_eq!(c.to_string(), "Coordinate({'b': 0.5})");
    }
}
