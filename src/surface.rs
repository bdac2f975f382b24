use crate::Px;

/// Base codepoint of the braille block: the pattern with no dots raised.
///
/// Dot offsets within one character:
///
/// ```text
///  1   8
///  2  10
///  4  20
/// 40  80
/// ```
///
/// Adding the offsets of the raised dots to `0x2800` yields the character.
const BRAILLE_EMPTY: u32 = 0x2800;

/// Logical pixels one character cell covers, per axis.
pub const DOTS_X: Px = 2;
pub const DOTS_Y: Px = 4;

/// The drawing surface: a monochrome framebuffer addressed in logical
/// pixels, presented as lines of braille characters (2x4 pixels each).
pub struct Surface {
    /// The pixel buffer. `fb[y * w + x]` is whether pixel `(x, y)` has ink.
    fb: Vec<bool>,

    /// Codepoints, one per character cell. Rebuilt on [`Surface::render`].
    cp: Vec<u32>,

    /// The rendered frame, one newline-terminated row of characters per
    /// character row.
    out: String,

    /// Width of the surface in pixels
    w: Px,

    /// Height of the surface in pixels
    h: Px,
}

impl Surface {
    pub fn new(w: Px, h: Px) -> Self {
        let mut surface = Self {
            fb: Vec::new(),
            cp: Vec::new(),
            out: String::new(),
            w: 0,
            h: 0,
        };

        surface.resize(w, h);

        surface
    }

    pub fn width(&self) -> Px {
        self.w
    }

    pub fn height(&self) -> Px {
        self.h
    }

    /// Displayed width, in character cells.
    pub fn cols(&self) -> Px {
        self.w.div_ceil(DOTS_X)
    }

    /// Displayed height, in character cells.
    pub fn rows(&self) -> Px {
        self.h.div_ceil(DOTS_Y)
    }

    /// Reallocate to `w x h` pixels. All ink is cleared.
    pub fn resize(&mut self, w: Px, h: Px) {
        self.w = w;
        self.h = h;

        self.fb.clear();
        self.fb.resize((w as usize) * (h as usize), false);

        self.cp.clear();
        self.cp
            .resize((self.cols() as usize) * (self.rows() as usize), BRAILLE_EMPTY);
    }

    pub fn get(&self, x: Px, y: Px) -> bool {
        assert!(x < self.w, "x is out of bounds");
        assert!(y < self.h, "y is out of bounds");

        self.fb[(y * self.w + x) as usize]
    }

    pub fn set(&mut self, x: Px, y: Px, ink: bool) {
        assert!(x < self.w, "x is out of bounds");
        assert!(y < self.h, "y is out of bounds");

        self.fb[(y * self.w + x) as usize] = ink;
    }

    /// Ink a `rw x rh` pixel rectangle on or off, clipped to the surface.
    pub fn fill_rect(&mut self, x: Px, y: Px, rw: Px, rh: Px, ink: bool) {
        let x1 = x.saturating_add(rw).min(self.w);
        let y1 = y.saturating_add(rh).min(self.h);

        for py in y.min(self.h)..y1 {
            for px in x.min(self.w)..x1 {
                self.fb[(py * self.w + px) as usize] = ink;
            }
        }
    }

    /// 1-px vertical line spanning the full surface height. Off-surface
    /// strokes are dropped.
    pub fn vline(&mut self, x: Px) {
        if x >= self.w {
            return;
        }

        for y in 0..self.h {
            self.fb[(y * self.w + x) as usize] = true;
        }
    }

    /// 1-px horizontal line spanning the full surface width.
    pub fn hline(&mut self, y: Px) {
        if y >= self.h {
            return;
        }

        for x in 0..self.w {
            self.fb[(y * self.w + x) as usize] = true;
        }
    }

    /// Encode the pixel buffer as braille text.
    ///
    /// Every character accumulates the dot offsets of its raised pixels on
    /// top of the blank pattern; each pixel is visited once, so no offset is
    /// added twice.
    pub fn render(&mut self) -> &str {
        let cols = self.cols() as usize;

        self.cp.fill(BRAILLE_EMPTY);

        for (n, &px) in self.fb.iter().enumerate() {
            if !px {
                continue;
            }

            let (x, y) = (n % self.w as usize, n / self.w as usize);

            self.cp[(y / DOTS_Y as usize) * cols + (x / DOTS_X as usize)] += Self::dot_offset(x, y);
        }

        self.out.clear();

        for (i, &c) in self.cp.iter().enumerate() {
            if i > 0 && i % cols == 0 {
                self.out.push('\n');
            }

            self.out.push(::std::char::from_u32(c).unwrap());
        }
        self.out.push('\n');

        &self.out
    }

    fn dot_offset(x: usize, y: usize) -> u32 {
        match (x % 2, y % 4) {
            (0, 0) => 0x1,
            (1, 0) => 0x8,
            (0, 1) => 0x2,
            (1, 1) => 0x10,
            (0, 2) => 0x4,
            (1, 2) => 0x20,
            (0, 3) => 0x40,
            (1, 3) => 0x80,
            _ => unreachable!(),
        }
    }
}
