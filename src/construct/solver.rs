//! Analytic complement construction.
//!
//! The orthogonality conditions between a known rate k/n code and an unknown
//! rate (n−k)/n code are linear in the unknown coefficients, so the
//! complement can be solved for directly:
//!
//! 1. The total memory of the known code, `Σᵢ (max_size(i) − 1)`, is spread
//!    as evenly as possible over the n−k unknown rows (remainders go to the
//!    first rows).
//! 2. For every known row `i` and unknown row `j`, each power of the cross
//!    sum `Σₘ conj(gᵢₘ(x⁻¹))·hⱼₘ(x)` gives one equation. The equation
//!    coefficients are conjugated coefficients of the known generators on a
//!    band, i.e. the convolution written as a matrix.
//! 3. The system is brought to row-echelon form. Pivot rows are scaled by
//!    the pivot's inverse, which in GF(4) is its conjugate.
//! 4. Back substitution runs from the last row up. Free variables take the
//!    values 1, u, v, 1, … in turn so the free choices do not collapse to
//!    zero.
//! 5. The solution vector is cut back into (n−k)·n generators.

use std::fmt::Write as _;

use ndarray::Array2;
use tracing::{debug, enabled, trace, Level};

use super::{check_complementable, Complement};
use crate::code::Code;
use crate::error::Result;
use crate::gf::Gf4;
use crate::series::Series;

/// The linear system describing the orthogonal complement of one code.
///
/// # Example
///
/// ```
/// use gf4codes::construct::OrthogonalSolver;
/// use gf4codes::Code;
///
/// let code: Code = "11|1u".parse().unwrap();
/// let solver = OrthogonalSolver::new(&code).unwrap();
///
/// assert_eq!(solver.degrees(), &[1]);
/// assert_eq!(solver.system().dim(), (3, 4));
///
/// let dual = solver.solve().unwrap();
/// assert!(code.is_orthogonal(&dual).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct OrthogonalSolver {
    n: usize,
    degrees: Vec<usize>,
    shifts: Vec<usize>,
    system: Array2<Gf4>,
}

impl OrthogonalSolver {
    /// Build the linear system for the complement of `code`.
    ///
    /// # Errors
    ///
    /// Returns an error if `code` fails validation or has `k >= n`.
    pub fn new(code: &Code) -> Result<Self> {
        check_complementable(code, "LinearSolve")?;

        let n = code.n();
        let other_k = n - code.k();
        let sizes = (0..code.k())
            .map(|i| code.max_size(i).map(|s| s - 1))
            .collect::<Result<Vec<_>>>()?;
        let degrees = distribute(sizes.iter().sum(), other_k);
        debug!(?degrees, "complement degree distribution");

        // column of the first coefficient of each unknown generator
        let mut shifts = Vec::with_capacity(other_k * n);
        let mut cols = 0;
        for &degree in &degrees {
            for _ in 0..n {
                shifts.push(cols);
                cols += degree + 1;
            }
        }

        let rows: usize = sizes
            .iter()
            .map(|&size| degrees.iter().map(|&d| size + d + 1).sum::<usize>())
            .sum();
        let mut system = Array2::from_elem((rows, cols), Gf4::ZERO);

        let mut base = 0;
        for (i, &size) in sizes.iter().enumerate() {
            for (j, &degree) in degrees.iter().enumerate() {
                for m in 0..n {
                    let known = &code.generators()[i * n + m];
                    let shift = shifts[j * n + m];
                    for ii in 0..=size {
                        let c = known.at(ii as isize).conj();
                        for jj in 0..=degree {
                            system[[base + size - ii + jj, shift + jj]] = c;
                        }
                    }
                }
                base += size + degree + 1;
            }
        }

        if enabled!(Level::TRACE) {
            trace!("linear system:\n{}", render(&system));
        }

        Ok(Self {
            n,
            degrees,
            shifts,
            system,
        })
    }

    /// Degree assigned to each complementary row.
    #[must_use]
    pub fn degrees(&self) -> &[usize] {
        &self.degrees
    }

    /// The equation matrix before reduction, one row per vanishing
    /// coefficient, one column per unknown coefficient.
    #[must_use]
    pub fn system(&self) -> &Array2<Gf4> {
        &self.system
    }

    /// Reduce the system and assemble the complementary code.
    ///
    /// # Errors
    ///
    /// Returns an error only if a generator window cannot be formed, which
    /// does not happen for systems built by [`OrthogonalSolver::new`].
    pub fn solve(&self) -> Result<Code> {
        let mut reduced = self.system.clone();
        let rank = row_echelon(&mut reduced);
        if enabled!(Level::TRACE) {
            trace!("row-echelon form (rank {rank}):\n{}", render(&reduced));
        }

        let values = back_substitute(&reduced);
        if enabled!(Level::TRACE) {
            let rendered: String = values.iter().map(|v| v.symbol()).collect();
            trace!(solution = %rendered, "back substitution");
        }

        let residual = self
            .system
            .rows()
            .into_iter()
            .filter(|row| row.iter().zip(&values).map(|(&a, &x)| a * x).sum::<Gf4>() != Gf4::ZERO)
            .count();
        debug!(
            equations = self.system.nrows(),
            unknowns = self.system.ncols(),
            rank,
            residual,
            "solved complement system"
        );

        let mut generators = Vec::with_capacity(self.shifts.len());
        for (j, &degree) in self.degrees.iter().enumerate() {
            for m in 0..self.n {
                let shift = self.shifts[j * self.n + m];
                let window = values[shift..=shift + degree].to_vec();
                generators.push(Series::new(window)?.normalized());
            }
        }
        Ok(Code::from_generators(generators, self.n, self.degrees.len()))
    }
}

/// Complement construction by Gaussian elimination over GF(4).
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearSolve;

impl Complement for LinearSolve {
    fn name(&self) -> &'static str {
        "LinearSolve"
    }

    fn complement(&self, code: &Code) -> Result<Code> {
        OrthogonalSolver::new(code)?.solve()
    }
}

/// Split `total` into `parts` near-equal shares, larger shares first.
fn distribute(total: usize, parts: usize) -> Vec<usize> {
    let avg = total / parts;
    let extra = total % parts;
    (0..parts).map(|j| avg + usize::from(j < extra)).collect()
}

/// Bring `m` to row-echelon form with unit pivots. Returns the rank.
fn row_echelon(m: &mut Array2<Gf4>) -> usize {
    let (rows, cols) = m.dim();
    let mut col = 0;
    for i in 0..rows {
        let pivot = loop {
            if col == cols {
                return i;
            }
            if let Some(r) = (i..rows).find(|&r| !m[[r, col]].is_zero()) {
                break r;
            }
            col += 1;
        };

        if pivot != i {
            for c in 0..cols {
                m.swap([i, c], [pivot, c]);
            }
        }

        let lead = m[[i, col]];
        if !lead.is_one() {
            let scale = lead.conj();
            for c in col..cols {
                m[[i, c]] *= scale;
            }
        }

        for r in (i + 1)..rows {
            let factor = m[[r, col]];
            if factor.is_zero() {
                continue;
            }
            for c in col..cols {
                let delta = m[[i, c]] * factor;
                m[[r, c]] += delta;
            }
        }

        col += 1;
    }
    rows
}

/// Solve an echelon system from the bottom up, giving free variables the
/// non-zero values in turn.
fn back_substitute(m: &Array2<Gf4>) -> Vec<Gf4> {
    let (rows, cols) = m.dim();
    let mut values = vec![Gf4::ZERO; cols];
    let mut assigned = vec![false; cols];

    let mut last_free = Gf4::V;
    let mut next_free = || {
        last_free = if last_free == Gf4::V {
            Gf4::ONE
        } else {
            last_free.succ()
        };
        last_free
    };

    for i in (0..rows).rev() {
        let Some(lead) = (0..cols).find(|&c| !m[[i, c]].is_zero()) else {
            continue;
        };
        let mut v = Gf4::ZERO;
        for c in (lead + 1)..cols {
            if !assigned[c] {
                values[c] = next_free();
                assigned[c] = true;
            }
            v += m[[i, c]] * values[c];
        }
        values[lead] = v;
        assigned[lead] = true;
    }

    // columns left of every pivot appear in no equation
    for c in 0..cols {
        if !assigned[c] {
            values[c] = next_free();
        }
    }
    values
}

fn render(m: &Array2<Gf4>) -> String {
    let mut out = String::new();
    for row in m.rows() {
        let line: Vec<String> = row.iter().map(ToString::to_string).collect();
        let _ = writeln!(out, "{}", line.join(" "));
    }
    out
}
