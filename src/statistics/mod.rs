//! Summary statistics over samples and populations.

mod mean;
mod variance;

pub use mean::Mean;
pub use variance::Variance;

pub trait Statistic<D, T> {
    fn compute(&self, data: &D) -> T;
}

// ===== 2-tuple: two statistics over the same data =====
impl<D, T1, T2, S1, S2> Statistic<D, (T1, T2)> for (S1, S2)
where
    S1: Statistic<D, T1>,
    S2: Statistic<D, T2>,
{
    #[inline]
    fn compute(&self, data: &D) -> (T1, T2) {
        let out1 = self.0.compute(data);
        let out2 = self.1.compute(data);
        (out1, out2)
    }
}
