//! Integer dial geometry
//!
//! Dial positions are minute steps: 0 at twelve o'clock, 60 per turn,
//! increasing clockwise. Sines are scaled by 256 so hand endpoints come
//! out of one multiply and one shift, without floating point.

/// Positions per full turn
pub const STEPS: u8 = 60;

/// sin(i * 6 deg) * 256 for the first quadrant
const QUARTER_SINE: [i16; 16] = [
    0, 27, 53, 79, 104, 128, 150, 171, 190, 207, 222, 234, 243, 250, 255, 256,
];

/// Sine of a dial position, scaled by 256
pub fn sin256(step: u8) -> i16 {
    let step = step % STEPS;
    let quadrant = step / 15;
    let index = usize::from(step % 15);
    match quadrant {
        0 => QUARTER_SINE[index],
        1 => QUARTER_SINE[15 - index],
        2 => -QUARTER_SINE[index],
        _ => -QUARTER_SINE[15 - index],
    }
}

/// Cosine of a dial position, scaled by 256
pub fn cos256(step: u8) -> i16 {
    sin256((step % STEPS) + 15)
}

/// Outer end of a hand of `length` pixels pointing at `step`
pub fn hand_end(cx: u8, cy: u8, step: u8, length: u8) -> (u8, u8) {
    let length = i32::from(length);
    let dx = i32::from(sin256(step)) * length / 256;
    let dy = -i32::from(cos256(step)) * length / 256;
    (offset(cx, dx), offset(cy, dy))
}

fn offset(origin: u8, delta: i32) -> u8 {
    let value = (i32::from(origin) + delta).clamp(0, i32::from(u8::MAX));
    u8::try_from(value).unwrap_or(u8::MAX)
}

/// Dial position of the hour hand, creeping forward with the minutes
pub fn hour_step(hour: u8, minute: u8) -> u8 {
    (hour % 12) * 5 + (minute % 60) / 12
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_cardinal_points() {
        assert_eq!((sin256(0), cos256(0)), (0, 256));
        assert_eq!((sin256(15), cos256(15)), (256, 0));
        assert_eq!((sin256(30), cos256(30)), (0, -256));
        assert_eq!((sin256(45), cos256(45)), (-256, 0));
    }

    #[test]
    fn test_hand_end_directions() {
        assert_eq!(hand_end(64, 32, 0, 20), (64, 12));
        assert_eq!(hand_end(64, 32, 15, 20), (84, 32));
        assert_eq!(hand_end(64, 32, 30, 20), (64, 52));
        assert_eq!(hand_end(64, 32, 45, 20), (44, 32));
    }

    #[test]
    fn test_hour_step() {
        assert_eq!(hour_step(0, 0), 0);
        assert_eq!(hour_step(15, 0), 15);
        assert_eq!(hour_step(3, 59), 19);
        assert_eq!(hour_step(23, 30), 57);
    }

    proptest! {
        #[test]
        fn test_sine_symmetry(step in 0u8..60) {
            prop_assert_eq!(sin256(step), -sin256((step + 30) % 60));
            let s = i32::from(sin256(step));
            let c = i32::from(cos256(step));
            // Unit circle within table rounding
            prop_assert!((s * s + c * c - 65536).abs() < 600);
        }
    }
}
