//! The 32-point compass rose.

/// One compass point: abbreviation and heading in degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct CompassPoint {
    pub abbreviation: String,
    pub azimuth: f64,
}

/// Degrees between adjacent points: 360 / 32.
const STEP: f64 = 11.25;

const CARDINALS: [char; 4] = ['N', 'E', 'S', 'W'];

/// Returns the 32 compass points in order, starting at N (0.0 degrees).
///
/// Each quarter contributes eight points named from its bounding cardinals.
/// The naming scheme alternates between quarters: in even quarters (N->E,
/// S->W) the half-wind is written `side` then `next`, in odd quarters (E->S,
/// W->N) it is written `next` then `side`, matching traditional usage
/// (NE and SW, but SE and NW).
pub fn compass_points() -> Vec<CompassPoint> {
    let mut points = Vec::with_capacity(32);

    for (quarter, &side) in CARDINALS.iter().enumerate() {
        let next = CARDINALS[(quarter + 1) % CARDINALS.len()];
        let even = quarter % 2 == 0;

        let names: [String; 8] = [
            format!("{side}"),
            format!("{side}b{next}"),
            if even {
                format!("{side}{side}{next}")
            } else {
                format!("{side}{next}{side}")
            },
            if even {
                format!("{side}{next}b{side}")
            } else {
                format!("{next}{side}b{side}")
            },
            if even {
                format!("{side}{next}")
            } else {
                format!("{next}{side}")
            },
            if even {
                format!("{side}{next}b{next}")
            } else {
                format!("{next}{side}b{next}")
            },
            if even {
                format!("{next}{side}{next}")
            } else {
                format!("{next}{next}{side}")
            },
            format!("{next}b{side}"),
        ];

        for name in names {
            let azimuth = points.len() as f64 * STEP;
            points.push(CompassPoint {
                abbreviation: name,
                azimuth,
            });
        }
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirty_two_points_at_even_steps() {
        let points = compass_points();
        assert_eq!(points.len(), 32);
        for (i, point) in points.iter().enumerate() {
            assert_eq!(point.azimuth, i as f64 * 11.25);
        }
    }

    #[test]
    fn first_quarter_names() {
        let points = compass_points();
        let names: Vec<&str> = points[..9].iter().map(|p| p.abbreviation.as_str()).collect();
        assert_eq!(
            names,
            ["N", "NbE", "NNE", "NEbN", "NE", "NEbE", "ENE", "EbN", "E"]
        );
    }

    #[test]
    fn odd_quarter_flips_the_half_wind() {
        let points = compass_points();
        // E->S quarter: SE rather than ES.
        assert_eq!(points[12].abbreviation, "SE");
        assert_eq!(points[12].azimuth, 135.0);
        // Last point wraps back toward N.
        assert_eq!(points[31].abbreviation, "NbW");
        assert_eq!(points[31].azimuth, 348.75);
    }
}
