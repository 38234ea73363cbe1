// Copyright 2017-2018 Peter Williams <peter@newton.cx> and collaborators
// Licensed under the GPL version 3.

/*! Upward and downward recursion for the spherical Bessel function `j_n(x)`.

Both methods use the three-term recurrence

```text
j_{k-1}(x) + j_{k+1}(x) = (2k + 1) / x * j_k(x)
```

but run it in opposite directions. Run upward, it amplifies rounding error
once the order exceeds the argument, because `j_n` then decays while the
competing solution `y_n` grows. Run downward from a seed well above the
target order, the unwanted solution dies out instead, and the result only
needs to be normalized against the closed form of `j_0`. The downward
method goes bad in turn once `x` approaches the starting order.

Neither routine tries to hide these failures: numerical blowups propagate
into the return value untouched.

*/

use errors::{Error, Result};


/// The orders 0 and 1 in closed form.
#[inline]
pub fn seeds(x: f64) -> (f64, f64) {
    let (sin, cos) = x.sin_cos();
    (sin / x, (sin - x * cos) / (x * x))
}


/// Evaluate `j_n(x)` by recursing upward from the closed forms of `j_0` and
/// `j_1`.
///
/// Orders 0 and 1 return the seeds themselves.
pub fn up_recursion(x: f64, n: u32) -> f64 {
    let (j0, j1) = seeds(x);

    if n == 0 {
        return j0;
    }

    let mut prev = j0;
    let mut cur = j1;

    for k in 1..n {
        let next = ((2. * k as f64 + 1.) / x) * cur - prev;
        prev = cur;
        cur = next;
    }

    cur
}


/// Evaluate `j_n(x)` by recursing downward from order `m`.
///
/// This allocates a buffer of exactly the right size for every call; use a
/// `DownwardRecursion` directly to reuse one.
pub fn down_recursion(x: f64, n: u32, m: u32) -> Result<f64> {
    DownwardRecursion::for_start(m).evaluate(x, n, m)
}


/// Scratch space for the downward recursion.
///
/// A recursion starting at order `m` touches entries `0` through `m + 1`,
/// so the buffer capacity bounds the largest usable starting order at
/// `capacity - 2`. That bound is checked on every evaluation.
#[derive(Clone, Debug, PartialEq)]
pub struct DownwardRecursion {
    values: Vec<f64>,
}

impl DownwardRecursion {
    /// Create a buffer with room for `capacity` orders.
    pub fn with_capacity(capacity: usize) -> Self {
        DownwardRecursion { values: vec![0.; capacity] }
    }

    /// Create a buffer just large enough to start at order `m`.
    pub fn for_start(m: u32) -> Self {
        DownwardRecursion::with_capacity(m as usize + 2)
    }

    /// The number of orders the buffer can hold.
    pub fn capacity(&self) -> usize {
        self.values.len()
    }

    /// The largest starting order this buffer supports, if any.
    pub fn max_start(&self) -> Option<u32> {
        self.values.len().checked_sub(2).map(|m| m as u32)
    }

    /// Evaluate `j_n(x)` starting the recursion at order `m`.
    ///
    /// The two highest entries are seeded with 1.0; the absolute scale is
    /// fixed afterwards by comparing the computed order-zero value with
    /// `sin(x) / x`. `m` must exceed `n` and fit in the buffer. `x` is not
    /// checked: a nonpositive argument gives garbage, not an error.
    pub fn evaluate(&mut self, x: f64, n: u32, m: u32) -> Result<f64> {
        if n >= m {
            return Err(Error::OrderNotBelowStart { order: n, start: m });
        }

        let m = m as usize;

        if m + 2 > self.values.len() {
            return Err(Error::StartOrderTooLarge { start: m as u32, capacity: self.values.len() });
        }

        let j = &mut self.values[..m + 2];
        j[m + 1] = 1.;
        j[m] = 1.;

        for k in (1..m + 1).rev() {
            j[k - 1] = ((2. * k as f64 + 1.) / x) * j[k] - j[k + 1];
        }

        let scale = (x.sin() / x) / j[0];
        Ok(j[n as usize] * scale)
    }
}
