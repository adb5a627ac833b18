use crate::axis::{is_valid_name, Axis};
use crate::error::SweepError;
use crate::invocation::Invocation;
use crate::template::{Binding, Template};
use std::collections::HashSet;
use std::iter::FusedIterator;

/// The Cartesian product of a set of axes, rendered through a template.
///
/// Points are visited in nested order: the first axis varies slowest and the
/// last axis varies fastest. The axes are owned by the sweep and cannot change
/// once it has been constructed.
#[derive(Debug, Clone)]
pub struct Sweep {
    template: Template,
    axes: Vec<Axis>,
    binding: Binding,
    len: usize,
}

impl Sweep {
    pub fn new(template: Template, axes: Vec<Axis>) -> Result<Self, SweepError> {
        let mut names = HashSet::with_capacity(axes.len());
        for axis in &axes {
            if !is_valid_name(axis.name()) {
                return Err(SweepError::InvalidAxisName(axis.name().to_string()));
            }
            if !names.insert(axis.name()) {
                return Err(SweepError::DuplicateAxis(axis.name().to_string()));
            }
        }
        let binding = template.bind(&axes)?;
        if !template.is_positional() {
            let placeholders = template.placeholders().collect::<HashSet<_>>();
            if let Some(unused) = axes.iter().find(|axis| !placeholders.contains(axis.name())) {
                return Err(SweepError::UnusedAxis(unused.name().to_string()));
            }
        }
        let len = Self::product(&axes)?;
        Ok(Self {
            template,
            axes,
            binding,
            len,
        })
    }

    fn product(axes: &[Axis]) -> Result<usize, SweepError> {
        if axes.iter().any(Axis::is_empty) {
            return Ok(0);
        }
        axes.iter()
            .try_fold(1usize, |len, axis| len.checked_mul(axis.len()))
            .ok_or(SweepError::TooLarge)
    }

    #[inline]
    pub fn template(&self) -> &Template {
        &self.template
    }

    #[inline]
    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    /// The number of points, i.e. the product of the axis lengths. A sweep
    /// with no axes has exactly one point.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn points(&self) -> Points<'_> {
        let len = self.len();
        Points {
            axes: &self.axes,
            next: if len > 0 { Some(vec![0; self.axes.len()]) } else { None },
            index: 0,
            len,
        }
    }

    pub fn invocations(&self) -> Invocations<'_> {
        Invocations {
            sweep: self,
            points: self.points(),
        }
    }

    /// Random access to the invocation at `index`, in sweep order.
    pub fn invocation(&self, index: usize) -> Result<Invocation, SweepError> {
        let len = self.len();
        if index >= len {
            return Err(SweepError::IndexOutOfRange { index, len });
        }

        let mut coordinates = vec![0; self.axes.len()];
        let mut remainder = index;
        for (coordinate, axis) in coordinates.iter_mut().zip(&self.axes).rev() {
            *coordinate = remainder % axis.len();
            remainder /= axis.len();
        }
        Ok(self.resolve(&Point {
            index,
            coordinates,
            axes: &self.axes,
        }))
    }

    fn resolve(&self, point: &Point<'_>) -> Invocation {
        Invocation::new(
            point.index,
            self.binding.program().to_string(),
            self.binding.render(&self.axes, &point.coordinates),
            point
                .values()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        )
    }
}

/// A single point of a sweep: one value index per axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Point<'a> {
    index: usize,
    coordinates: Vec<usize>,
    axes: &'a [Axis],
}

impl<'a> Point<'a> {
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn coordinates(&self) -> &[usize] {
        &self.coordinates
    }

    pub fn value(&self, axis: &str) -> Option<&'a str> {
        self.values()
            .find(|(name, _)| *name == axis)
            .map(|(_, value)| value)
    }

    pub fn values(&self) -> impl Iterator<Item = (&'a str, &'a str)> + '_ {
        let axes = self.axes;
        axes.iter()
            .zip(&self.coordinates)
            .map(|(axis, &coordinate)| (axis.name(), axis.values()[coordinate].as_str()))
    }
}

/// Odometer over the coordinates of a sweep, rightmost axis turning fastest.
pub struct Points<'a> {
    axes: &'a [Axis],
    next: Option<Vec<usize>>,
    index: usize,
    len: usize,
}

impl<'a> Points<'a> {
    fn advance(&self, coordinates: &[usize]) -> Option<Vec<usize>> {
        let mut coordinates = coordinates.to_vec();
        for position in (0..coordinates.len()).rev() {
            coordinates[position] += 1;
            if coordinates[position] < self.axes[position].len() {
                return Some(coordinates);
            }
            coordinates[position] = 0;
        }
        None
    }
}

impl<'a> Iterator for Points<'a> {
    type Item = Point<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let coordinates = self.next.take()?;
        self.next = self.advance(&coordinates);
        let point = Point {
            index: self.index,
            coordinates,
            axes: self.axes,
        };
        self.index += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Points<'_> {}

impl FusedIterator for Points<'_> {}

pub struct Invocations<'a> {
    sweep: &'a Sweep,
    points: Points<'a>,
}

impl Iterator for Invocations<'_> {
    type Item = Invocation;

    fn next(&mut self) -> Option<Self::Item> {
        self.points.next().map(|point| self.sweep.resolve(&point))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.points.size_hint()
    }
}

impl ExactSizeIterator for Invocations<'_> {}

impl FusedIterator for Invocations<'_> {}
