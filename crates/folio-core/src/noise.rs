//! 2D simplex noise for the wave grid.
//!
//! Smooth, seeded and cheap enough to sample a few thousand points per frame.
//! Output is in \[-1, 1\].

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

const F2: f32 = 0.366_025_42; // (sqrt(3) - 1) / 2
const G2: f32 = 0.211_324_87; // (3 - sqrt(3)) / 6

const GRADIENTS: [[f32; 2]; 12] = [
    [1.0, 1.0],
    [-1.0, 1.0],
    [1.0, -1.0],
    [-1.0, -1.0],
    [1.0, 0.0],
    [-1.0, 0.0],
    [1.0, 0.0],
    [-1.0, 0.0],
    [0.0, 1.0],
    [0.0, -1.0],
    [0.0, 1.0],
    [0.0, -1.0],
];

#[derive(Clone)]
pub struct SimplexNoise {
    perm: [u8; 512],
}

impl SimplexNoise {
    pub fn new(seed: u64) -> Self {
        let mut table: Vec<u8> = (0..=255).collect();
        table.shuffle(&mut StdRng::seed_from_u64(seed));
        let mut perm = [0u8; 512];
        for (i, slot) in perm.iter_mut().enumerate() {
            *slot = table[i & 255];
        }
        Self { perm }
    }

    #[inline]
    fn hash(&self, i: i32, j: i32) -> usize {
        let ii = (i & 255) as usize;
        let jj = (j & 255) as usize;
        self.perm[ii + self.perm[jj] as usize] as usize % GRADIENTS.len()
    }

    #[inline]
    fn corner(&self, x: f32, y: f32, gi: usize) -> f32 {
        let t = 0.5 - x * x - y * y;
        if t < 0.0 {
            0.0
        } else {
            let g = GRADIENTS[gi];
            let t2 = t * t;
            t2 * t2 * (g[0] * x + g[1] * y)
        }
    }

    pub fn sample(&self, x: f32, y: f32) -> f32 {
        let s = (x + y) * F2;
        let i = (x + s).floor() as i32;
        let j = (y + s).floor() as i32;
        let t = (i + j) as f32 * G2;
        let x0 = x - (i as f32 - t);
        let y0 = y - (j as f32 - t);

        let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };
        let x1 = x0 - i1 as f32 + G2;
        let y1 = y0 - j1 as f32 + G2;
        let x2 = x0 - 1.0 + 2.0 * G2;
        let y2 = y0 - 1.0 + 2.0 * G2;

        let n0 = self.corner(x0, y0, self.hash(i, j));
        let n1 = self.corner(x1, y1, self.hash(i + i1, j + j1));
        let n2 = self.corner(x2, y2, self.hash(i + 1, j + 1));

        (70.0 * (n0 + n1 + n2)).clamp(-1.0, 1.0)
    }
}
