use crate::core::models::{BorderPadding, EdgeResponseBuffer, GrayscaleBuffer};
use crate::global_constants::LOG_TAG_EDGE_FILTER;

/// Convolves with the 4-neighbour Laplacian kernel
///
/// ```text
///  0  1  0
///  1 -4  1
///  0  1  0
/// ```
///
/// Responses are kept as signed integers without clamping; the extreme values
/// are -1020 and +1020.
pub fn laplacian(gray: &GrayscaleBuffer, padding: BorderPadding) -> EdgeResponseBuffer {
    let width = gray.width() as usize;
    let height = gray.height() as usize;

    log::debug!(
        "{} filtering {}x{} buffer with {:?} padding",
        LOG_TAG_EDGE_FILTER,
        width,
        height,
        padding
    );

    let mut samples = Vec::with_capacity(width * height);

    for y in 0..height {
        for x in 0..width {
            let center = i32::from(gray.sample_at(x, y));
            let (column, row) = (x as isize, y as isize);

            let top = neighbour_sample(gray, column, row - 1, padding);
            let bottom = neighbour_sample(gray, column, row + 1, padding);
            let left = neighbour_sample(gray, column - 1, row, padding);
            let right = neighbour_sample(gray, column + 1, row, padding);

            samples.push(top + bottom + left + right - 4 * center);
        }
    }

    EdgeResponseBuffer::from_converted_samples(gray.width(), gray.height(), samples)
}

fn neighbour_sample(gray: &GrayscaleBuffer, x: isize, y: isize, padding: BorderPadding) -> i32 {
    let width = gray.width() as usize;
    let height = gray.height() as usize;

    match padding {
        BorderPadding::Zero => {
            let inside = x >= 0 && y >= 0 && (x as usize) < width && (y as usize) < height;
            if inside {
                i32::from(gray.sample_at(x as usize, y as usize))
            } else {
                0
            }
        }
        BorderPadding::Reflect => {
            let column = reflect_index(x, width);
            let row = reflect_index(y, height);
            i32::from(gray.sample_at(column, row))
        }
    }
}

// Reflect without repeating the edge sample. Offsets never exceed one cell.
fn reflect_index(index: isize, len: usize) -> usize {
    if len == 1 {
        return 0;
    }

    let last = len as isize - 1;
    let reflected = if index < 0 {
        -index
    } else if index > last {
        2 * last - index
    } else {
        index
    };

    reflected as usize
}
