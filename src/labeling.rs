//! Connected component labeling of binary masks (8-connectivity).
//!
//! Classic two-pass scheme:
//! 1. Raster scan. Each foreground pixel looks at its already visited
//!    neighbors (west, north-west, north, north-east), takes the smallest
//!    provisional label among them (or opens a new one) and records the
//!    equivalence of all labels it touches in a union-find forest.
//! 2. Second scan. Every provisional label is replaced by its root, and roots
//!    are renumbered `1..=count` in order of first appearance.
//!
//! Label 0 is background. Two foreground pixels share a label iff an
//! 8-connected foreground path joins them.
use crate::image::{ImageView, MaskU8};

/// Integer component map with the same shape as the labeled mask.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelMap {
    pub w: usize,
    pub h: usize,
    /// Row-major labels, 0 for background
    pub labels: Vec<u32>,
    /// Number of foreground components; labels run from 1 to `count`
    pub count: usize,
}

impl LabelMap {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u32 {
        self.labels[y * self.w + x]
    }
}

/// Union-find over provisional labels. Index 0 is the background and never
/// merged.
struct UnionFind {
    parent: Vec<u32>,
}

impl UnionFind {
    fn new() -> Self {
        Self { parent: vec![0] }
    }

    fn make_set(&mut self) -> u32 {
        let label = self.parent.len() as u32;
        self.parent.push(label);
        label
    }

    fn find(&mut self, mut x: u32) -> u32 {
        while self.parent[x as usize] != x {
            let grand = self.parent[self.parent[x as usize] as usize];
            self.parent[x as usize] = grand; // path halving
            x = grand;
        }
        x
    }

    /// Merge two sets; the smaller root becomes the representative.
    fn union(&mut self, a: u32, b: u32) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra < rb {
            self.parent[rb as usize] = ra;
        } else if rb < ra {
            self.parent[ra as usize] = rb;
        }
    }

    fn len(&self) -> usize {
        self.parent.len()
    }
}

/// Label the 8-connected foreground components of `mask`.
pub fn label_components(mask: &MaskU8) -> LabelMap {
    let (w, h) = (mask.w, mask.h);
    let mut labels = vec![0u32; w * h];
    let mut sets = UnionFind::new();

    for y in 0..h {
        let row = mask.row(y);
        for x in 0..w {
            if row[x] == 0 {
                continue;
            }
            let mut neighbors = [0u32; 4];
            if x > 0 {
                neighbors[0] = labels[y * w + x - 1];
            }
            if y > 0 {
                let above = (y - 1) * w;
                if x > 0 {
                    neighbors[1] = labels[above + x - 1];
                }
                neighbors[2] = labels[above + x];
                if x + 1 < w {
                    neighbors[3] = labels[above + x + 1];
                }
            }

            let smallest = neighbors.iter().copied().filter(|&l| l != 0).min();
            labels[y * w + x] = match smallest {
                None => sets.make_set(),
                Some(min_label) => {
                    for &l in neighbors.iter().filter(|&&l| l != 0 && l != min_label) {
                        sets.union(min_label, l);
                    }
                    min_label
                }
            };
        }
    }

    let mut compact = vec![0u32; sets.len()];
    let mut count = 0u32;
    for label in labels.iter_mut().filter(|l| **l != 0) {
        let root = sets.find(*label) as usize;
        if compact[root] == 0 {
            count += 1;
            compact[root] = count;
        }
        *label = compact[root];
    }

    LabelMap {
        w,
        h,
        labels,
        count: count as usize,
    }
}
