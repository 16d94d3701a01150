//! Constant tables for the DES key schedule and round function
//! (ANSI X3.92-1981).

/// PC-1: selects 56 of the 64 key bits, dropping the parity bits.
#[rustfmt::skip]
pub const PC1: [usize; 56] = [
    56, 48, 40, 32, 24, 16,  8,  0, 57, 49, 41, 33, 25, 17,
     9,  1, 58, 50, 42, 34, 26, 18, 10,  2, 59, 51, 43, 35,
    62, 54, 46, 38, 30, 22, 14,  6, 61, 53, 45, 37, 29, 21,
    13,  5, 60, 52, 44, 36, 28, 20, 12,  4, 27, 19, 11,  3,
];

/// Cumulative left-rotation offsets into the 56-bit key material, one per
/// round (not per-round deltas; each is applied to the original halves).
#[rustfmt::skip]
pub const TOTAL_ROTATIONS: [usize; 16] = [
    1, 2, 4, 6, 8, 10, 12, 14, 15, 17, 19, 21, 23, 25, 27, 28,
];

/// PC-2: selects the 48 subkey bits, 24 from each rotated half.
#[rustfmt::skip]
pub const PC2: [usize; 48] = [
    13, 16, 10, 23,  0,  4,  2, 27, 14,  5, 20,  9,
    22, 18, 11,  3, 25,  7, 15,  6, 26, 19, 12,  1,
    40, 51, 30, 36, 46, 54, 29, 39, 50, 44, 32, 47,
    43, 48, 38, 55, 33, 52, 45, 41, 49, 35, 28, 31,
];

/// The eight substitution boxes with the P permutation folded into every
/// entry, so a round is four lookups per word with no separate
/// permutation step afterwards.
#[rustfmt::skip]
pub const SP_BOXES: [[u32; 64]; 8] = [
    [
        0x0101_0400, 0x0000_0000, 0x0001_0000, 0x0101_0404,
        0x0101_0004, 0x0001_0404, 0x0000_0004, 0x0001_0000,
        0x0000_0400, 0x0101_0400, 0x0101_0404, 0x0000_0400,
        0x0100_0404, 0x0101_0004, 0x0100_0000, 0x0000_0004,
        0x0000_0404, 0x0100_0400, 0x0100_0400, 0x0001_0400,
        0x0001_0400, 0x0101_0000, 0x0101_0000, 0x0100_0404,
        0x0001_0004, 0x0100_0004, 0x0100_0004, 0x0001_0004,
        0x0000_0000, 0x0000_0404, 0x0001_0404, 0x0100_0000,
        0x0001_0000, 0x0101_0404, 0x0000_0004, 0x0101_0000,
        0x0101_0400, 0x0100_0000, 0x0100_0000, 0x0000_0400,
        0x0101_0004, 0x0001_0000, 0x0001_0400, 0x0100_0004,
        0x0000_0400, 0x0000_0004, 0x0100_0404, 0x0001_0404,
        0x0101_0404, 0x0001_0004, 0x0101_0000, 0x0100_0404,
        0x0100_0004, 0x0000_0404, 0x0001_0404, 0x0101_0400,
        0x0000_0404, 0x0100_0400, 0x0100_0400, 0x0000_0000,
        0x0001_0004, 0x0001_0400, 0x0000_0000, 0x0101_0004,
    ],
    [
        0x8010_8020, 0x8000_8000, 0x0000_8000, 0x0010_8020,
        0x0010_0000, 0x0000_0020, 0x8010_0020, 0x8000_8020,
        0x8000_0020, 0x8010_8020, 0x8010_8000, 0x8000_0000,
        0x8000_8000, 0x0010_0000, 0x0000_0020, 0x8010_0020,
        0x0010_8000, 0x0010_0020, 0x8000_8020, 0x0000_0000,
        0x8000_0000, 0x0000_8000, 0x0010_8020, 0x8010_0000,
        0x0010_0020, 0x8000_0020, 0x0000_0000, 0x0010_8000,
        0x0000_8020, 0x8010_8000, 0x8010_0000, 0x0000_8020,
        0x0000_0000, 0x0010_8020, 0x8010_0020, 0x0010_0000,
        0x8000_8020, 0x8010_0000, 0x8010_8000, 0x0000_8000,
        0x8010_0000, 0x8000_8000, 0x0000_0020, 0x8010_8020,
        0x0010_8020, 0x0000_0020, 0x0000_8000, 0x8000_0000,
        0x0000_8020, 0x8010_8000, 0x0010_0000, 0x8000_0020,
        0x0010_0020, 0x8000_8020, 0x8000_0020, 0x0010_0020,
        0x0010_8000, 0x0000_0000, 0x8000_8000, 0x0000_8020,
        0x8000_0000, 0x8010_0020, 0x8010_8020, 0x0010_8000,
    ],
    [
        0x0000_0208, 0x0802_0200, 0x0000_0000, 0x0802_0008,
        0x0800_0200, 0x0000_0000, 0x0002_0208, 0x0800_0200,
        0x0002_0008, 0x0800_0008, 0x0800_0008, 0x0002_0000,
        0x0802_0208, 0x0002_0008, 0x0802_0000, 0x0000_0208,
        0x0800_0000, 0x0000_0008, 0x0802_0200, 0x0000_0200,
        0x0002_0200, 0x0802_0000, 0x0802_0008, 0x0002_0208,
        0x0800_0208, 0x0002_0200, 0x0002_0000, 0x0800_0208,
        0x0000_0008, 0x0802_0208, 0x0000_0200, 0x0800_0000,
        0x0802_0200, 0x0800_0000, 0x0002_0008, 0x0000_0208,
        0x0002_0000, 0x0802_0200, 0x0800_0200, 0x0000_0000,
        0x0000_0200, 0x0002_0008, 0x0802_0208, 0x0800_0200,
        0x0800_0008, 0x0000_0200, 0x0000_0000, 0x0802_0008,
        0x0800_0208, 0x0002_0000, 0x0800_0000, 0x0802_0208,
        0x0000_0008, 0x0002_0208, 0x0002_0200, 0x0800_0008,
        0x0802_0000, 0x0800_0208, 0x0000_0208, 0x0802_0000,
        0x0002_0208, 0x0000_0008, 0x0802_0008, 0x0002_0200,
    ],
    [
        0x0080_2001, 0x0000_2081, 0x0000_2081, 0x0000_0080,
        0x0080_2080, 0x0080_0081, 0x0080_0001, 0x0000_2001,
        0x0000_0000, 0x0080_2000, 0x0080_2000, 0x0080_2081,
        0x0000_0081, 0x0000_0000, 0x0080_0080, 0x0080_0001,
        0x0000_0001, 0x0000_2000, 0x0080_0000, 0x0080_2001,
        0x0000_0080, 0x0080_0000, 0x0000_2001, 0x0000_2080,
        0x0080_0081, 0x0000_0001, 0x0000_2080, 0x0080_0080,
        0x0000_2000, 0x0080_2080, 0x0080_2081, 0x0000_0081,
        0x0080_0080, 0x0080_0001, 0x0080_2000, 0x0080_2081,
        0x0000_0081, 0x0000_0000, 0x0000_0000, 0x0080_2000,
        0x0000_2080, 0x0080_0080, 0x0080_0081, 0x0000_0001,
        0x0080_2001, 0x0000_2081, 0x0000_2081, 0x0000_0080,
        0x0080_2081, 0x0000_0081, 0x0000_0001, 0x0000_2000,
        0x0080_0001, 0x0000_2001, 0x0080_2080, 0x0080_0081,
        0x0000_2001, 0x0000_2080, 0x0080_0000, 0x0080_2001,
        0x0000_0080, 0x0080_0000, 0x0000_2000, 0x0080_2080,
    ],
    [
        0x0000_0100, 0x0208_0100, 0x0208_0000, 0x4200_0100,
        0x0008_0000, 0x0000_0100, 0x4000_0000, 0x0208_0000,
        0x4008_0100, 0x0008_0000, 0x0200_0100, 0x4008_0100,
        0x4200_0100, 0x4208_0000, 0x0008_0100, 0x4000_0000,
        0x0200_0000, 0x4008_0000, 0x4008_0000, 0x0000_0000,
        0x4000_0100, 0x4208_0100, 0x4208_0100, 0x0200_0100,
        0x4208_0000, 0x4000_0100, 0x0000_0000, 0x4200_0000,
        0x0208_0100, 0x0200_0000, 0x4200_0000, 0x0008_0100,
        0x0008_0000, 0x4200_0100, 0x0000_0100, 0x0200_0000,
        0x4000_0000, 0x0208_0000, 0x4200_0100, 0x4008_0100,
        0x0200_0100, 0x4000_0000, 0x4208_0000, 0x0208_0100,
        0x4008_0100, 0x0000_0100, 0x0200_0000, 0x4208_0000,
        0x4208_0100, 0x0008_0100, 0x4200_0000, 0x4208_0100,
        0x0208_0000, 0x0000_0000, 0x4008_0000, 0x4200_0000,
        0x0008_0100, 0x0200_0100, 0x4000_0100, 0x0008_0000,
        0x0000_0000, 0x4008_0000, 0x0208_0100, 0x4000_0100,
    ],
    [
        0x2000_0010, 0x2040_0000, 0x0000_4000, 0x2040_4010,
        0x2040_0000, 0x0000_0010, 0x2040_4010, 0x0040_0000,
        0x2000_4000, 0x0040_4010, 0x0040_0000, 0x2000_0010,
        0x0040_0010, 0x2000_4000, 0x2000_0000, 0x0000_4010,
        0x0000_0000, 0x0040_0010, 0x2000_4010, 0x0000_4000,
        0x0040_4000, 0x2000_4010, 0x0000_0010, 0x2040_0010,
        0x2040_0010, 0x0000_0000, 0x0040_4010, 0x2040_4000,
        0x0000_4010, 0x0040_4000, 0x2040_4000, 0x2000_0000,
        0x2000_4000, 0x0000_0010, 0x2040_0010, 0x0040_4000,
        0x2040_4010, 0x0040_0000, 0x0000_4010, 0x2000_0010,
        0x0040_0000, 0x2000_4000, 0x2000_0000, 0x0000_4010,
        0x2000_0010, 0x2040_4010, 0x0040_4000, 0x2040_0000,
        0x0040_4010, 0x2040_4000, 0x0000_0000, 0x2040_0010,
        0x0000_0010, 0x0000_4000, 0x2040_0000, 0x0040_4010,
        0x0000_4000, 0x0040_0010, 0x2000_4010, 0x0000_0000,
        0x2040_4000, 0x2000_0000, 0x0040_0010, 0x2000_4010,
    ],
    [
        0x0020_0000, 0x0420_0002, 0x0400_0802, 0x0000_0000,
        0x0000_0800, 0x0400_0802, 0x0020_0802, 0x0420_0800,
        0x0420_0802, 0x0020_0000, 0x0000_0000, 0x0400_0002,
        0x0000_0002, 0x0400_0000, 0x0420_0002, 0x0000_0802,
        0x0400_0800, 0x0020_0802, 0x0020_0002, 0x0400_0800,
        0x0400_0002, 0x0420_0000, 0x0420_0800, 0x0020_0002,
        0x0420_0000, 0x0000_0800, 0x0000_0802, 0x0420_0802,
        0x0020_0800, 0x0000_0002, 0x0400_0000, 0x0020_0800,
        0x0400_0000, 0x0020_0800, 0x0020_0000, 0x0400_0802,
        0x0400_0802, 0x0420_0002, 0x0420_0002, 0x0000_0002,
        0x0020_0002, 0x0400_0000, 0x0400_0800, 0x0020_0000,
        0x0420_0800, 0x0000_0802, 0x0020_0802, 0x0420_0800,
        0x0000_0802, 0x0400_0002, 0x0420_0802, 0x0420_0000,
        0x0020_0800, 0x0000_0000, 0x0000_0002, 0x0420_0802,
        0x0000_0000, 0x0020_0802, 0x0420_0000, 0x0000_0800,
        0x0400_0002, 0x0400_0800, 0x0000_0800, 0x0020_0002,
    ],
    [
        0x1000_1040, 0x0000_1000, 0x0004_0000, 0x1004_1040,
        0x1000_0000, 0x1000_1040, 0x0000_0040, 0x1000_0000,
        0x0004_0040, 0x1004_0000, 0x1004_1040, 0x0004_1000,
        0x1004_1000, 0x0004_1040, 0x0000_1000, 0x0000_0040,
        0x1004_0000, 0x1000_0040, 0x1000_1000, 0x0000_1040,
        0x0004_1000, 0x0004_0040, 0x1004_0040, 0x1004_1000,
        0x0000_1040, 0x0000_0000, 0x0000_0000, 0x1004_0040,
        0x1000_0040, 0x1000_1000, 0x0004_1040, 0x0004_0000,
        0x0004_1040, 0x0004_0000, 0x1004_1000, 0x0000_1000,
        0x0000_0040, 0x1004_0040, 0x0000_1000, 0x0004_1040,
        0x1000_1000, 0x0000_0040, 0x1000_0040, 0x1004_0000,
        0x1004_0040, 0x1000_0000, 0x0004_0000, 0x1000_1040,
        0x0000_0000, 0x1004_1040, 0x0004_0040, 0x1000_0040,
        0x1004_0000, 0x1000_1000, 0x1000_1040, 0x0000_0000,
        0x1004_1040, 0x0004_1000, 0x0004_1000, 0x0000_1040,
        0x0000_1040, 0x0004_0040, 0x1000_0000, 0x1004_1000,
    ],
];
