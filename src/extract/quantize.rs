//! Median-cut color quantization over a 5-bit-per-channel histogram.

use image::RgbaImage;

const SIGBITS: u32 = 5;
const RSHIFT: u32 = 8 - SIGBITS;
const SIDE: usize = 1 << SIGBITS;
const HISTO_SIZE: usize = 1 << (3 * SIGBITS);

/// Fraction of the box budget split by population before switching to
/// population × volume.
const POPULATION_PHASE: f64 = 0.75;

/// A quantized color and how many sampled pixels landed in it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantizedColor {
    pub rgb: [f64; 3],
    pub population: u32,
}

const fn index(r: usize, g: usize, b: usize) -> usize {
    (r << (2 * SIGBITS)) | (g << SIGBITS) | b
}

/// Pixel counts per 5-bit color cell.
pub struct Histogram {
    counts: Vec<u32>,
    total: u64,
}

impl Histogram {
    /// Sample every `stride`-th pixel, ignoring translucent and near-white
    /// pixels.
    pub fn from_image(image: &RgbaImage, stride: usize) -> Self {
        let mut counts = vec![0u32; HISTO_SIZE];
        let mut total = 0u64;
        for pixel in image.pixels().step_by(stride.max(1)) {
            let [r, g, b, a] = pixel.0;
            if a < 125 || (r > 250 && g > 250 && b > 250) {
                continue;
            }
            let idx = index(
                usize::from(r >> RSHIFT),
                usize::from(g >> RSHIFT),
                usize::from(b >> RSHIFT),
            );
            counts[idx] += 1;
            total += 1;
        }
        Self { counts, total }
    }

    pub const fn total(&self) -> u64 {
        self.total
    }

    fn count(&self, r: usize, g: usize, b: usize) -> u32 {
        self.counts[index(r, g, b)]
    }
}

/// An axis-aligned box in 5-bit color space, bounds inclusive.
#[derive(Debug, Clone, Copy)]
struct VBox {
    lo: [usize; 3],
    hi: [usize; 3],
    count: u64,
}

impl VBox {
    fn new(lo: [usize; 3], hi: [usize; 3], histo: &Histogram) -> Self {
        let mut vbox = Self { lo, hi, count: 0 };
        vbox.count = vbox.cells().map(|(r, g, b)| u64::from(histo.count(r, g, b))).sum();
        vbox
    }

    fn cells(&self) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
        (self.lo[0]..=self.hi[0]).flat_map(move |r| {
            (self.lo[1]..=self.hi[1])
                .flat_map(move |g| (self.lo[2]..=self.hi[2]).map(move |b| (r, g, b)))
        })
    }

    fn volume(&self) -> u64 {
        (0..3).map(|i| (self.hi[i] - self.lo[i] + 1) as u64).product()
    }

    fn splittable(&self) -> bool {
        self.count > 1 && (0..3).any(|i| self.hi[i] > self.lo[i])
    }

    fn longest_axis(&self) -> usize {
        (0..3)
            .max_by_key(|&i| (self.hi[i] - self.lo[i], std::cmp::Reverse(i)))
            .unwrap_or(0)
    }

    /// Split at the population median along the longest axis.
    fn split(&self, histo: &Histogram) -> (Self, Self) {
        let axis = self.longest_axis();
        let half = self.count.div_ceil(2);

        let mut cut = self.lo[axis];
        let mut acc = 0u64;
        for plane in self.lo[axis]..=self.hi[axis] {
            let mut lo = self.lo;
            let mut hi = self.hi;
            lo[axis] = plane;
            hi[axis] = plane;
            acc += Self::new(lo, hi, histo).count;
            cut = plane;
            if acc >= half {
                break;
            }
        }
        // Both halves must be non-degenerate.
        if cut == self.hi[axis] {
            cut -= 1;
        }

        let mut left_hi = self.hi;
        left_hi[axis] = cut;
        let mut right_lo = self.lo;
        right_lo[axis] = cut + 1;
        (
            Self::new(self.lo, left_hi, histo),
            Self::new(right_lo, self.hi, histo),
        )
    }

    fn average(&self, histo: &Histogram) -> [f64; 3] {
        let mut sum = [0.0f64; 3];
        let mut total = 0.0f64;
        for (r, g, b) in self.cells() {
            let n = f64::from(histo.count(r, g, b));
            if n == 0.0 {
                continue;
            }
            total += n;
            for (acc, cell) in sum.iter_mut().zip([r, g, b]) {
                *acc += n * (cell as f64 + 0.5) * f64::from(1u32 << RSHIFT);
            }
        }
        if total == 0.0 {
            return [0.0; 3];
        }
        sum.map(|s| s / total)
    }
}

/// Reduce the histogram to at most `max_colors` representative colors.
pub fn median_cut(histo: &Histogram, max_colors: usize) -> Vec<QuantizedColor> {
    if histo.total() == 0 || max_colors == 0 {
        return Vec::new();
    }

    let mut boxes = vec![VBox::new([0; 3], [SIDE - 1; 3], histo)];
    let population_target = ((max_colors as f64) * POPULATION_PHASE).ceil() as usize;

    split_until(&mut boxes, histo, population_target, |b| b.count);
    split_until(&mut boxes, histo, max_colors, |b| b.count * b.volume());

    boxes
        .iter()
        .filter(|b| b.count > 0)
        .map(|b| QuantizedColor {
            rgb: b.average(histo),
            population: u32::try_from(b.count).unwrap_or(u32::MAX),
        })
        .collect()
}

fn split_until(
    boxes: &mut Vec<VBox>,
    histo: &Histogram,
    target: usize,
    priority: impl Fn(&VBox) -> u64,
) {
    while boxes.len() < target {
        let Some(pos) = boxes
            .iter()
            .enumerate()
            .filter(|(_, b)| b.splittable())
            .max_by_key(|(_, b)| priority(b))
            .map(|(i, _)| i)
        else {
            break;
        };
        let vbox = boxes.swap_remove(pos);
        let (left, right) = vbox.split(histo);
        for half in [left, right] {
            if half.count > 0 {
                boxes.push(half);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn two_tone(width: u32, split_at: u32) -> RgbaImage {
        RgbaImage::from_fn(width, 1, |x, _| {
            if x < split_at {
                Rgba([200, 30, 30, 255])
            } else {
                Rgba([20, 40, 160, 255])
            }
        })
    }

    #[test]
    fn histogram_skips_transparent_and_white() {
        let img = RgbaImage::from_fn(3, 1, |x, _| match x {
            0 => Rgba([10, 10, 10, 255]),
            1 => Rgba([10, 10, 10, 0]),
            _ => Rgba([255, 255, 255, 255]),
        });
        assert_eq!(Histogram::from_image(&img, 1).total(), 1);
    }

    #[test]
    fn stride_samples_subset() {
        let img = RgbaImage::from_pixel(10, 10, Rgba([50, 60, 70, 255]));
        assert_eq!(Histogram::from_image(&img, 5).total(), 20);
    }

    #[test]
    fn two_colors_become_two_boxes() {
        let histo = Histogram::from_image(&two_tone(40, 30), 1);
        let mut colors = median_cut(&histo, 16);
        colors.sort_by_key(|c| std::cmp::Reverse(c.population));
        assert_eq!(colors.len(), 2);
        assert_eq!(colors[0].population, 30);
        assert_eq!(colors[1].population, 10);
        // cell centers: 200 -> 25*8+4, 30 -> 3*8+4
        assert_eq!(colors[0].rgb, [204.0, 28.0, 28.0]);
    }

    #[test]
    fn populations_sum_to_sample_count() {
        let img = RgbaImage::from_fn(32, 32, |x, y| {
            Rgba([(x * 8) as u8, (y * 8) as u8, ((x + y) * 4) as u8, 255])
        });
        let histo = Histogram::from_image(&img, 1);
        let colors = median_cut(&histo, 64);
        assert!(colors.len() <= 64);
        assert!(colors.len() > 8);
        let sum: u64 = colors.iter().map(|c| u64::from(c.population)).sum();
        assert_eq!(sum, histo.total());
    }

    #[test]
    fn empty_histogram_yields_nothing() {
        let img = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 0]));
        assert!(median_cut(&Histogram::from_image(&img, 1), 64).is_empty());
    }
}
