//! 2D vector value type used by particles and the scene driver.
//!
//! Every operation comes in two flavours:
//! - an allocating form (`add`, `multiply_scalar`, ...) that takes `self` by value
//!   and returns a new vector, leaving the operand untouched;
//! - an in-place form (`add_in_place`, `multiply_scalar_in_place`, ...) that
//!   mutates the receiver and returns `&mut Self` so calls can be chained.
//!
//! Scalar operations have a uniform form (`multiply_scalar(s)`) and a per-axis
//! form (`multiply_scalar_xy(sx, sy)`); the uniform form broadcasts to both axes.

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use glam::DVec2;
use serde::{Deserialize, Serialize};

const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;
const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Vector with both axes set to `value`.
    pub const fn splat(value: f64) -> Self {
        Self { x: value, y: value }
    }

    pub fn set(&mut self, x: f64, y: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Single-argument `set`: broadcasts `value` to both axes.
    pub fn set_uniform(&mut self, value: f64) -> &mut Self {
        self.set(value, value)
    }

    // -- Derived properties --

    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Alias of [`Vector2D::magnitude`].
    pub fn length(&self) -> f64 {
        self.magnitude()
    }

    /// Angle in radians, `atan2(y, x)`.
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Alias of [`Vector2D::angle`].
    pub fn direction(&self) -> f64 {
        self.angle()
    }

    pub fn angle_degrees(&self) -> f64 {
        self.angle() * RAD_TO_DEG
    }

    /// Alias of [`Vector2D::angle_degrees`].
    pub fn direction_degrees(&self) -> f64 {
        self.angle_degrees()
    }

    pub fn absolute_x(&self) -> f64 {
        self.x.abs()
    }

    pub fn absolute_y(&self) -> f64 {
        self.y.abs()
    }

    /// Read alias for `x` when the vector is used as a size.
    pub fn width(&self) -> f64 {
        self.x
    }

    /// Read alias for `y` when the vector is used as a size.
    pub fn height(&self) -> f64 {
        self.y
    }

    // -- Componentwise vector ops --

    #[allow(clippy::should_implement_trait)]
    pub fn add(self, other: Vector2D) -> Vector2D {
        Vector2D::new(self.x + other.x, self.y + other.y)
    }

    pub fn add_in_place(&mut self, other: Vector2D) -> &mut Self {
        self.x += other.x;
        self.y += other.y;
        self
    }

    pub fn subtract(self, other: Vector2D) -> Vector2D {
        Vector2D::new(self.x - other.x, self.y - other.y)
    }

    pub fn subtract_in_place(&mut self, other: Vector2D) -> &mut Self {
        self.x -= other.x;
        self.y -= other.y;
        self
    }

    pub fn multiply(self, other: Vector2D) -> Vector2D {
        Vector2D::new(self.x * other.x, self.y * other.y)
    }

    pub fn multiply_in_place(&mut self, other: Vector2D) -> &mut Self {
        self.x *= other.x;
        self.y *= other.y;
        self
    }

    pub fn divide(self, other: Vector2D) -> Vector2D {
        Vector2D::new(self.x / other.x, self.y / other.y)
    }

    pub fn divide_in_place(&mut self, other: Vector2D) -> &mut Self {
        self.x /= other.x;
        self.y /= other.y;
        self
    }

    // -- Scalar ops --

    pub fn add_scalar(self, scalar: f64) -> Vector2D {
        self.add_scalar_xy(scalar, scalar)
    }

    pub fn add_scalar_xy(self, sx: f64, sy: f64) -> Vector2D {
        Vector2D::new(self.x + sx, self.y + sy)
    }

    pub fn add_scalar_in_place(&mut self, scalar: f64) -> &mut Self {
        self.add_scalar_xy_in_place(scalar, scalar)
    }

    pub fn add_scalar_xy_in_place(&mut self, sx: f64, sy: f64) -> &mut Self {
        self.x += sx;
        self.y += sy;
        self
    }

    pub fn subtract_scalar(self, scalar: f64) -> Vector2D {
        self.subtract_scalar_xy(scalar, scalar)
    }

    pub fn subtract_scalar_xy(self, sx: f64, sy: f64) -> Vector2D {
        Vector2D::new(self.x - sx, self.y - sy)
    }

    pub fn subtract_scalar_in_place(&mut self, scalar: f64) -> &mut Self {
        self.subtract_scalar_xy_in_place(scalar, scalar)
    }

    pub fn subtract_scalar_xy_in_place(&mut self, sx: f64, sy: f64) -> &mut Self {
        self.x -= sx;
        self.y -= sy;
        self
    }

    pub fn multiply_scalar(self, scalar: f64) -> Vector2D {
        self.multiply_scalar_xy(scalar, scalar)
    }

    pub fn multiply_scalar_xy(self, sx: f64, sy: f64) -> Vector2D {
        Vector2D::new(self.x * sx, self.y * sy)
    }

    pub fn multiply_scalar_in_place(&mut self, scalar: f64) -> &mut Self {
        self.multiply_scalar_xy_in_place(scalar, scalar)
    }

    pub fn multiply_scalar_xy_in_place(&mut self, sx: f64, sy: f64) -> &mut Self {
        self.x *= sx;
        self.y *= sy;
        self
    }

    pub fn divide_scalar(self, scalar: f64) -> Vector2D {
        self.divide_scalar_xy(scalar, scalar)
    }

    pub fn divide_scalar_xy(self, sx: f64, sy: f64) -> Vector2D {
        Vector2D::new(self.x / sx, self.y / sy)
    }

    pub fn divide_scalar_in_place(&mut self, scalar: f64) -> &mut Self {
        self.divide_scalar_xy_in_place(scalar, scalar)
    }

    pub fn divide_scalar_xy_in_place(&mut self, sx: f64, sy: f64) -> &mut Self {
        self.x /= sx;
        self.y /= sy;
        self
    }

    // -- Products and distance --

    pub fn dot_product(&self, other: Vector2D) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Scalar 2D cross product, `x1 * y2 - y1 * x2`.
    pub fn cross_product(&self, other: Vector2D) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn distance(&self, other: Vector2D) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Move toward `target` by `alpha` (0 stays, 1 lands on target). Not clamped.
    pub fn lerp(&mut self, target: Vector2D, alpha: f64) -> &mut Self {
        self.x += (target.x - self.x) * alpha;
        self.y += (target.y - self.y) * alpha;
        self
    }

    /// Rotate about `pivot` by `angle_degrees`.
    ///
    /// Positive angles turn clockwise in a y-up frame: `(1, 0)` rotated by 90
    /// about the origin lands on `(0, -1)`.
    pub fn rotate(&mut self, pivot: Vector2D, angle_degrees: f64) -> &mut Self {
        let radians = angle_degrees * DEG_TO_RAD;
        let (sin, cos) = radians.sin_cos();
        let dx = self.x - pivot.x;
        let dy = self.y - pivot.y;

        self.x = cos * dx + sin * dy + pivot.x;
        self.y = cos * dy - sin * dx + pivot.y;
        self
    }

    // -- Rounding --

    pub fn ceil(&mut self) -> &mut Self {
        self.x = self.x.ceil();
        self.y = self.y.ceil();
        self
    }

    pub fn floor(&mut self) -> &mut Self {
        self.x = self.x.floor();
        self.y = self.y.floor();
        self
    }

    /// Round each axis to the nearest integer, halves toward positive infinity.
    pub fn round(&mut self) -> &mut Self {
        self.x = round_half_up(self.x);
        self.y = round_half_up(self.y);
        self
    }

    // -- Clamping --

    /// Componentwise: take `other`'s value on any axis where it is smaller.
    pub fn min(&mut self, other: Vector2D) -> &mut Self {
        if self.x > other.x {
            self.x = other.x;
        }
        if self.y > other.y {
            self.y = other.y;
        }
        self
    }

    /// Componentwise: take `other`'s value on any axis where it is larger.
    pub fn max(&mut self, other: Vector2D) -> &mut Self {
        if self.x < other.x {
            self.x = other.x;
        }
        if self.y < other.y {
            self.y = other.y;
        }
        self
    }

    /// Exact floating-point equality on both axes.
    pub fn equals(&self, other: Vector2D) -> bool {
        self.x == other.x && self.y == other.y
    }

    pub fn clear(&mut self) -> &mut Self {
        self.set(0.0, 0.0)
    }

    pub fn invert(&mut self) -> &mut Self {
        self.x = -self.x;
        self.y = -self.y;
        self
    }

    /// Divide each axis by the magnitude.
    ///
    /// An axis whose quotient comes out as zero or NaN is replaced by `1`, so
    /// the zero vector normalizes to `(1, 1)` and `(0, 5)` to `(1, 1)` as well.
    /// The result is therefore not always a unit vector.
    pub fn normalize(self) -> Vector2D {
        let magnitude = self.magnitude();
        Vector2D::new(
            zero_or_nan_to_one(self.x / magnitude),
            zero_or_nan_to_one(self.y / magnitude),
        )
    }

    /// Assign both axes from `other`.
    pub fn copy_from(&mut self, other: Vector2D) -> &mut Self {
        self.set(other.x, other.y)
    }

    // -- Conversion --

    pub fn to_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// `{ "x": .., "y": .. }` record.
    pub fn to_object(&self) -> serde_json::Value {
        serde_json::json!({ "x": self.x, "y": self.y })
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

fn zero_or_nan_to_one(value: f64) -> f64 {
    if value == 0.0 || value.is_nan() {
        1.0
    } else {
        value
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x: {}, y: {}", self.x, self.y)
    }
}

impl Add for Vector2D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Vector2D::add(self, rhs)
    }
}

impl Sub for Vector2D {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.subtract(rhs)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        self.multiply_scalar(scalar)
    }
}

impl Div<f64> for Vector2D {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        self.divide_scalar(scalar)
    }
}

impl Neg for Vector2D {
    type Output = Self;

    fn neg(mut self) -> Self {
        self.invert();
        self
    }
}

impl AddAssign for Vector2D {
    fn add_assign(&mut self, rhs: Self) {
        self.add_in_place(rhs);
    }
}

impl SubAssign for Vector2D {
    fn sub_assign(&mut self, rhs: Self) {
        self.subtract_in_place(rhs);
    }
}

impl From<[f64; 2]> for Vector2D {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<(f64, f64)> for Vector2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<DVec2> for Vector2D {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2D> for DVec2 {
    fn from(v: Vector2D) -> Self {
        DVec2::new(v.x, v.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn approx(a: Vector2D, b: Vector2D) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    #[test]
    fn defaults_to_zero() {
        assert_eq!(Vector2D::default(), Vector2D::ZERO);
        let v: Vector2D = serde_json::from_str("{}").unwrap();
        assert_eq!(v, Vector2D::ZERO);
        let v: Vector2D = serde_json::from_str(r#"{"x": 4}"#).unwrap();
        assert_eq!(v, Vector2D::new(4.0, 0.0));
    }

    #[test]
    fn set_uniform_broadcasts() {
        let mut v = Vector2D::new(1.0, 2.0);
        v.set_uniform(7.0);
        assert_eq!(v, Vector2D::splat(7.0));
        v.set(3.0, 4.0);
        assert_eq!(v, Vector2D::new(3.0, 4.0));
    }

    #[test]
    fn derived_properties() {
        let v = Vector2D::new(3.0, 4.0);
        assert_eq!(v.magnitude(), 5.0);
        assert_eq!(v.length(), v.magnitude());
        assert_eq!(v.direction(), v.angle());

        let up = Vector2D::new(0.0, 2.0);
        assert!((up.angle() - std::f64::consts::FRAC_PI_2).abs() < EPS);
        assert!((up.angle_degrees() - 90.0).abs() < EPS);
        assert_eq!(up.direction_degrees(), up.angle_degrees());

        let neg = Vector2D::new(-3.0, -8.0);
        assert_eq!(neg.absolute_x(), 3.0);
        assert_eq!(neg.absolute_y(), 8.0);
        assert_eq!(neg.width(), -3.0);
        assert_eq!(neg.height(), -8.0);
    }

    #[test]
    fn allocating_ops_leave_operands_untouched() {
        let a = Vector2D::new(6.0, 8.0);
        let b = Vector2D::new(2.0, 4.0);

        assert_eq!(a.add(b), Vector2D::new(8.0, 12.0));
        assert_eq!(a.subtract(b), Vector2D::new(4.0, 4.0));
        assert_eq!(a.multiply(b), Vector2D::new(12.0, 32.0));
        assert_eq!(a.divide(b), Vector2D::new(3.0, 2.0));
        assert_eq!(a, Vector2D::new(6.0, 8.0));
        assert_eq!(b, Vector2D::new(2.0, 4.0));
    }

    #[test]
    fn in_place_ops_mutate_and_chain() {
        let mut v = Vector2D::new(1.0, 1.0);
        v.add_in_place(Vector2D::new(1.0, 2.0))
            .multiply_in_place(Vector2D::new(2.0, 2.0))
            .subtract_in_place(Vector2D::new(1.0, 1.0))
            .divide_in_place(Vector2D::new(3.0, 5.0));
        assert_eq!(v, Vector2D::new(1.0, 1.0));
    }

    #[test]
    fn scalar_ops_broadcast_or_split() {
        let v = Vector2D::new(2.0, 4.0);
        assert_eq!(v.add_scalar(1.0), Vector2D::new(3.0, 5.0));
        assert_eq!(v.add_scalar_xy(1.0, -1.0), Vector2D::new(3.0, 3.0));
        assert_eq!(v.subtract_scalar(2.0), Vector2D::new(0.0, 2.0));
        assert_eq!(v.subtract_scalar_xy(2.0, 1.0), Vector2D::new(0.0, 3.0));
        assert_eq!(v.multiply_scalar(3.0), Vector2D::new(6.0, 12.0));
        assert_eq!(v.multiply_scalar_xy(0.5, 2.0), Vector2D::new(1.0, 8.0));
        assert_eq!(v.divide_scalar(2.0), Vector2D::new(1.0, 2.0));
        assert_eq!(v.divide_scalar_xy(2.0, 4.0), Vector2D::new(1.0, 1.0));

        let mut w = v;
        w.add_scalar_in_place(1.0)
            .subtract_scalar_xy_in_place(1.0, 2.0)
            .multiply_scalar_in_place(2.0)
            .divide_scalar_xy_in_place(4.0, 2.0);
        assert_eq!(w, Vector2D::new(1.0, 3.0));
        w.subtract_scalar_in_place(1.0).add_scalar_xy_in_place(0.0, 1.0);
        w.multiply_scalar_xy_in_place(3.0, 1.0).divide_scalar_in_place(1.0);
        assert_eq!(w, Vector2D::new(0.0, 3.0));
    }

    #[test]
    fn multiply_scalar_identity_and_zero() {
        let a = Vector2D::new(-12.5, 3.25);
        assert!(a.multiply_scalar(1.0).equals(a));
        assert!(a.multiply_scalar(0.0).equals(Vector2D::ZERO));
    }

    #[test]
    fn add_then_subtract_round_trips() {
        let a = Vector2D::new(0.1, -7.3);
        let b = Vector2D::new(1e3, 0.7);
        assert!(approx(a.add(b).subtract(b), a));
    }

    #[test]
    fn division_by_zero_follows_float_semantics() {
        let v = Vector2D::new(1.0, 0.0).divide_scalar(0.0);
        assert_eq!(v.x, f64::INFINITY);
        assert!(v.y.is_nan());
    }

    #[test]
    fn products_and_distance() {
        let a = Vector2D::new(1.0, 2.0);
        let b = Vector2D::new(3.0, 4.0);
        assert_eq!(a.dot_product(b), 11.0);
        assert_eq!(a.cross_product(b), -2.0);
        assert_eq!(Vector2D::ZERO.distance(Vector2D::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn lerp_is_not_clamped() {
        let mut v = Vector2D::ZERO;
        v.lerp(Vector2D::new(10.0, -10.0), 0.25);
        assert_eq!(v, Vector2D::new(2.5, -2.5));

        let mut w = Vector2D::ZERO;
        w.lerp(Vector2D::new(1.0, 1.0), 2.0);
        assert_eq!(w, Vector2D::new(2.0, 2.0));
    }

    #[test]
    fn rotate_quarter_turn_is_clockwise() {
        let mut v = Vector2D::new(1.0, 0.0);
        v.rotate(Vector2D::ZERO, 90.0);
        assert!(approx(v, Vector2D::new(0.0, -1.0)), "got {v}");
    }

    #[test]
    fn rotate_full_turn_returns_to_start() {
        let start = Vector2D::new(12.0, -3.5);
        let mut v = start;
        v.rotate(Vector2D::new(4.0, 4.0), 360.0);
        assert!(approx(v, start), "got {v}");
    }

    #[test]
    fn rotate_about_pivot() {
        let mut v = Vector2D::new(2.0, 1.0);
        v.rotate(Vector2D::new(1.0, 1.0), 180.0);
        assert!(approx(v, Vector2D::new(0.0, 1.0)), "got {v}");
    }

    #[test]
    fn rounding() {
        let mut v = Vector2D::new(1.2, -1.2);
        v.ceil();
        assert_eq!(v, Vector2D::new(2.0, -1.0));

        let mut v = Vector2D::new(1.8, -1.2);
        v.floor();
        assert_eq!(v, Vector2D::new(1.0, -2.0));

        let mut v = Vector2D::new(2.5, -2.5);
        v.round();
        assert_eq!(v, Vector2D::new(3.0, -2.0));

        let mut v = Vector2D::new(0.49999999999999994, 1.4);
        v.round();
        assert_eq!(v, Vector2D::new(0.0, 1.0));
    }

    #[test]
    fn min_max_clamp_per_axis() {
        let mut v = Vector2D::new(5.0, 1.0);
        v.min(Vector2D::new(3.0, 3.0));
        assert_eq!(v, Vector2D::new(3.0, 1.0));

        let mut v = Vector2D::new(5.0, 1.0);
        v.max(Vector2D::new(3.0, 3.0));
        assert_eq!(v, Vector2D::new(5.0, 3.0));
    }

    #[test]
    fn equals_is_exact() {
        let a = Vector2D::new(0.1 + 0.2, 1.0);
        assert!(!a.equals(Vector2D::new(0.3, 1.0)));
        assert!(a.equals(a));
        assert!(!Vector2D::splat(f64::NAN).equals(Vector2D::splat(f64::NAN)));
    }

    #[test]
    fn clear_and_invert() {
        let mut v = Vector2D::new(3.0, -4.0);
        v.invert();
        assert_eq!(v, Vector2D::new(-3.0, 4.0));
        assert_eq!(-v, Vector2D::new(3.0, -4.0));
        v.clear();
        assert_eq!(v, Vector2D::ZERO);
    }

    #[test]
    fn normalize_regular_vector() {
        let n = Vector2D::new(3.0, 4.0).normalize();
        assert!(approx(n, Vector2D::new(0.6, 0.8)));
    }

    #[test]
    fn normalize_falls_back_to_one() {
        assert_eq!(Vector2D::ZERO.normalize(), Vector2D::new(1.0, 1.0));
        assert_eq!(Vector2D::new(0.0, 5.0).normalize(), Vector2D::new(1.0, 1.0));
        assert_eq!(Vector2D::new(-2.0, 0.0).normalize(), Vector2D::new(-1.0, 1.0));
    }

    #[test]
    fn clone_is_independent() {
        let original = Vector2D::new(1.0, 2.0);
        let mut copy = original.clone();
        assert!(copy.equals(original));
        copy.add_scalar_in_place(10.0);
        assert_eq!(original, Vector2D::new(1.0, 2.0));

        let mut target = Vector2D::ZERO;
        target.copy_from(original);
        assert_eq!(target, original);
    }

    #[test]
    fn conversions() {
        let v = Vector2D::new(1.5, -2.0);
        assert_eq!(v.to_array(), [1.5, -2.0]);
        assert_eq!(v.to_object(), serde_json::json!({ "x": 1.5, "y": -2.0 }));
        assert_eq!(v.to_string(), "x: 1.5, y: -2");
        assert_eq!(Vector2D::from([1.5, -2.0]), v);
        assert_eq!(Vector2D::from((1.5, -2.0)), v);
        assert_eq!(Vector2D::from(DVec2::new(1.5, -2.0)), v);
        assert_eq!(DVec2::from(v), DVec2::new(1.5, -2.0));
    }

    #[test]
    fn operators_match_named_methods() {
        let a = Vector2D::new(1.0, 2.0);
        let b = Vector2D::new(3.0, 5.0);
        assert_eq!(a + b, a.add(b));
        assert_eq!(b - a, b.subtract(a));
        assert_eq!(a * 2.0, a.multiply_scalar(2.0));
        assert_eq!(b / 2.0, b.divide_scalar(2.0));

        let mut c = a;
        c += b;
        c -= a;
        assert_eq!(c, b);
    }
}
