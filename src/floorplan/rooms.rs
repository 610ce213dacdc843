//! Room categories and their constraint tables.
//!
//! Every category constrains a room's length and width, optionally its
//! area, and its aspect ratio `max(l, w) / min(l, w)`. All comparisons
//! allow a slack of [`TOLERANCE`] so that values on the 0.1 gene grid can
//! satisfy exact-ratio and fixed-size constraints.

use std::fmt;

/// Slack applied to every constraint comparison.
pub const TOLERANCE: f64 = 0.01;

/// Closed interval `[low, high]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub low: f64,
    pub high: f64,
}

impl Range {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Membership test with [`TOLERANCE`] slack on both ends.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.low - TOLERANCE && value <= self.high + TOLERANCE
    }
}

/// Constraint on a single side length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Side {
    Fixed(f64),
    Between(Range),
}

impl Side {
    pub fn accepts(&self, value: f64) -> bool {
        match *self {
            Side::Fixed(target) => (value - target).abs() <= TOLERANCE,
            Side::Between(range) => range.contains(value),
        }
    }

    /// Largest admissible value.
    pub fn max(&self) -> f64 {
        match *self {
            Side::Fixed(v) => v,
            Side::Between(r) => r.high,
        }
    }

    pub fn min(&self) -> f64 {
        match *self {
            Side::Fixed(v) => v,
            Side::Between(r) => r.low,
        }
    }
}

/// Constraint on `max(l, w) / min(l, w)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Aspect {
    Any,
    Fixed(f64),
    Between(Range),
}

impl Aspect {
    pub fn accepts(&self, ratio: f64) -> bool {
        match *self {
            Aspect::Any => true,
            Aspect::Fixed(target) => (ratio - target).abs() <= TOLERANCE,
            Aspect::Between(range) => range.contains(ratio),
        }
    }
}

/// Validity rules and cost weighting for one room category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomConstraints {
    pub length: Side,
    pub width: Side,
    pub area: Option<Range>,
    pub aspect: Aspect,
    /// Multiplier applied to area to obtain cost.
    pub cost_factor: f64,
}

impl RoomConstraints {
    /// Largest area a valid room of this category may have.
    pub fn max_area(&self) -> f64 {
        match self.area {
            Some(range) => range.high,
            None => self.length.max() * self.width.max(),
        }
    }
}

const LIVING: RoomConstraints = RoomConstraints {
    length: Side::Between(Range::new(8.0, 20.0)),
    width: Side::Between(Range::new(8.0, 20.0)),
    area: Some(Range::new(120.0, 300.0)),
    aspect: Aspect::Fixed(1.5),
    cost_factor: 1.0,
};

const KITCHEN: RoomConstraints = RoomConstraints {
    length: Side::Between(Range::new(6.0, 18.0)),
    width: Side::Between(Range::new(6.0, 18.0)),
    area: Some(Range::new(50.0, 120.0)),
    aspect: Aspect::Between(Range::new(1.0, 1.5)),
    cost_factor: 2.0,
};

const BATH: RoomConstraints = RoomConstraints {
    length: Side::Fixed(5.5),
    width: Side::Fixed(8.5),
    area: None,
    aspect: Aspect::Any,
    cost_factor: 2.0,
};

const HALL: RoomConstraints = RoomConstraints {
    length: Side::Fixed(5.5),
    width: Side::Between(Range::new(3.5, 6.0)),
    area: Some(Range::new(19.0, 72.0)),
    aspect: Aspect::Between(Range::new(1.0, 1.5)),
    cost_factor: 1.0,
};

const BED1: RoomConstraints = RoomConstraints {
    length: Side::Between(Range::new(10.0, 17.0)),
    width: Side::Between(Range::new(10.0, 17.0)),
    area: Some(Range::new(100.0, 180.0)),
    aspect: Aspect::Fixed(1.5),
    cost_factor: 1.0,
};

const BED2: RoomConstraints = RoomConstraints {
    length: Side::Between(Range::new(9.0, 20.0)),
    width: Side::Between(Range::new(9.0, 20.0)),
    area: Some(Range::new(100.0, 180.0)),
    aspect: Aspect::Fixed(1.5),
    cost_factor: 1.0,
};

const BED3: RoomConstraints = RoomConstraints {
    length: Side::Between(Range::new(8.0, 18.0)),
    width: Side::Between(Range::new(8.0, 18.0)),
    area: Some(Range::new(100.0, 180.0)),
    aspect: Aspect::Fixed(1.5),
    cost_factor: 1.0,
};

/// Room category. The declaration order is the order rooms appear in a
/// chromosome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoomType {
    Living,
    Kitchen,
    Bath,
    Hall,
    Bed1,
    Bed2,
    Bed3,
}

impl RoomType {
    /// All categories in chromosome order.
    pub const ALL: [RoomType; 7] = [
        RoomType::Living,
        RoomType::Kitchen,
        RoomType::Bath,
        RoomType::Hall,
        RoomType::Bed1,
        RoomType::Bed2,
        RoomType::Bed3,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            RoomType::Living => "Living",
            RoomType::Kitchen => "Kitchen",
            RoomType::Bath => "Bath",
            RoomType::Hall => "Hall",
            RoomType::Bed1 => "Bed1",
            RoomType::Bed2 => "Bed2",
            RoomType::Bed3 => "Bed3",
        }
    }

    pub fn constraints(&self) -> &'static RoomConstraints {
        match self {
            RoomType::Living => &LIVING,
            RoomType::Kitchen => &KITCHEN,
            RoomType::Bath => &BATH,
            RoomType::Hall => &HALL,
            RoomType::Bed1 => &BED1,
            RoomType::Bed2 => &BED2,
            RoomType::Bed3 => &BED3,
        }
    }

    /// Cost charged for an invalid room: the worst cost a valid room of
    /// this category can have.
    pub fn penalty(&self) -> f64 {
        let c = self.constraints();
        c.cost_factor * c.max_area()
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single room. Position is carried through the chromosome but not
/// constrained.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Room {
    pub room_type: RoomType,
    pub length: f64,
    pub width: f64,
    pub x: f64,
    pub y: f64,
}

/// Outcome of each individual constraint check for one room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomValidity {
    pub length: bool,
    pub width: bool,
    pub area: bool,
    pub aspect: bool,
}

impl RoomValidity {
    pub fn is_valid(&self) -> bool {
        self.length && self.width && self.area && self.aspect
    }
}

impl Room {
    pub fn area(&self) -> f64 {
        self.length * self.width
    }

    /// `max(l, w) / min(l, w)`; infinite for a degenerate room.
    pub fn aspect_ratio(&self) -> f64 {
        let (lo, hi) = if self.length <= self.width {
            (self.length, self.width)
        } else {
            (self.width, self.length)
        };
        if lo <= 0.0 {
            f64::INFINITY
        } else {
            hi / lo
        }
    }

    /// Checks every constraint of the room's category separately.
    pub fn validity(&self) -> RoomValidity {
        let c = self.room_type.constraints();
        RoomValidity {
            length: c.length.accepts(self.length),
            width: c.width.accepts(self.width),
            area: c.area.map_or(true, |r| r.contains(self.area())),
            aspect: c.aspect.accepts(self.aspect_ratio()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validity().is_valid()
    }

    /// Raw cost, ignoring validity.
    pub fn cost(&self) -> f64 {
        self.room_type.constraints().cost_factor * self.area()
    }

    /// Contribution to the objective: cost if valid, penalty otherwise.
    ///
    /// A valid room's cost is capped at the penalty, since [`TOLERANCE`]
    /// slack on the area bound can otherwise push it a hair above.
    pub fn objective(&self) -> f64 {
        let penalty = self.room_type.penalty();
        if self.is_valid() {
            self.cost().min(penalty)
        } else {
            penalty
        }
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<8} {:>6.1} x {:<6.1} at ({:.1}, {:.1}) area {:.2}{}",
            self.room_type.name(),
            self.length,
            self.width,
            self.x,
            self.y,
            self.area(),
            if self.is_valid() { "" } else { " [invalid]" }
        )
    }
}
