//! Path: game_core/src/physics/rng.rs
//! Summary: 決定論的 LCG 乱数ジェネレータ（外部クレート不要）

pub struct SimpleRng(u64);

impl SimpleRng {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub fn next_u32(&mut self) -> u32 {
        self.0 = self.0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 33) as u32
    }

    pub fn next_f32(&mut self) -> f32 {
        self.next_u32() as f32 / u32::MAX as f32
    }

    /// [lo, hi) の一様乱数
    pub fn next_range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + self.next_f32() * (hi - lo)
    }

    /// [0, n) の一様整数（n == 0 は 0 を返す）
    pub fn next_below(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.next_u32() % n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_reproducibility() {
        let mut a = SimpleRng::new(12345);
        let mut b = SimpleRng::new(12345);
        let xs: Vec<u32> = (0..16).map(|_| a.next_u32()).collect();
        let ys: Vec<u32> = (0..16).map(|_| b.next_u32()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn next_range_bounds() {
        let mut rng = SimpleRng::new(999);
        for _ in 0..100 {
            let v = rng.next_range(50.0, 120.0);
            assert!(v >= 50.0 && v <= 120.0);
        }
    }

    #[test]
    fn next_below_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..100 {
            assert!(rng.next_below(5) < 5);
        }
        assert_eq!(rng.next_below(0), 0);
    }
}
