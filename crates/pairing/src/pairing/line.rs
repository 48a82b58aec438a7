use zkv_algebra::field::FieldExtension;

/// A line function on Fp12 x Fp12 in a sparse representation.
/// Let `Fp12 = Fp2[w] / (w^6 - \xi)`. Then the line function is
/// `L(x,y) = 1 + b (x/y) w + c (1/y) w^3` for a D-type twist.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnevaluatedLine<Fp2> {
    pub b: Fp2,
    pub c: Fp2,
}

/// The output of a line function on Fp12 x Fp12 (see `UnevaluatedLine`).
/// Represents `1 + b w + c w^3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EvaluatedLine<Fp2> {
    pub b: Fp2,
    pub c: Fp2,
}

pub trait Evaluatable<Fp, Fp2> {
    /// `xy_frac` is `(x/y, 1/y)` for the G1 point the line is evaluated at.
    fn evaluate(&self, xy_frac: &(Fp, Fp)) -> EvaluatedLine<Fp2>;
}

impl<Fp, Fp2> Evaluatable<Fp, Fp2> for UnevaluatedLine<Fp2>
where
    Fp2: FieldExtension<Fp>,
{
    fn evaluate(&self, xy_frac: &(Fp, Fp)) -> EvaluatedLine<Fp2> {
        let (x_over_y, y_inv) = xy_frac;
        EvaluatedLine {
            b: self.b.mul_base(x_over_y),
            c: self.c.mul_base(y_inv),
        }
    }
}

/// Convert D-type lines into Fp12 elements
pub trait FromLineDType<Fp2> {
    fn from_evaluated_line_d_type(line: EvaluatedLine<Fp2>) -> Self;
}

/// Sparse multiplications by D-type lines. Coefficient indices refer to powers of `w`.
pub trait LineMulDType<Fp2, Fp12> {
    /// Multiplies two lines in 013-form to get an element in 01234-form
    fn mul_013_by_013(l0: &EvaluatedLine<Fp2>, l1: &EvaluatedLine<Fp2>) -> [Fp2; 5];

    /// Multiplies a line in 013-form with a Fp12 element to get an Fp12 element
    fn mul_by_013(f: &Fp12, l: &EvaluatedLine<Fp2>) -> Fp12;

    /// Multiplies a line in 01234-form with a Fp12 element to get an Fp12 element
    fn mul_by_01234(f: &Fp12, x: &[Fp2; 5]) -> Fp12;
}
