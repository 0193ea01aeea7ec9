// Copyright 2025 the Expandable Label Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// 24 four-letter words: six lines of four words in a 100px label.
pub(crate) const WORDS: &str = "w00x w01x w02x w03x w04x w05x w06x w07x w08x w09x w10x w11x \
w12x w13x w14x w15x w16x w17x w18x w19x w20x w21x w22x w23x";

/// Fits on a single line.
pub(crate) const SHORT: &str = "Short text";

/// Paragraphs separated by hard breaks.
pub(crate) const PARAGRAPHS: &str = "one two\nthree four\nfive six";

/// A single word wider than the label.
pub(crate) const LONG_TOKEN: &str = "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";

pub(crate) const LOREM_IPSUM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Integer cursus interdum dui, in gravida ligula aliquam in. Vivamus vitae metus pharetra, ultricies metus quis, consectetur augue. Phasellus ac mauris et nisi pretium aliquet sed ac orci.";
