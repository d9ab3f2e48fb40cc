use geoprep_types::Polygon;

use super::assemble::compose;
use super::dateline::{intersections, merge};
use super::ring::{build_edges, PolygonEdges};
use super::DATELINE;
use crate::error::GeoprepError;

/// Splits the polygon into polygons that do not cross the dateline.
///
/// Shells of the result are wound according to `right_handed` (counterclockwise when set), holes
/// the opposite way.
pub(crate) fn decompose_polygon(
    polygon: &Polygon,
    right_handed: bool,
) -> Result<Vec<Polygon>, GeoprepError> {
    let PolygonEdges {
        mut graph,
        mut holes,
        translated,
    } = build_edges(polygon, right_handed)?;

    let mut edges: Vec<usize> = (0..graph.len()).collect();
    for dateline in [DATELINE, -DATELINE] {
        let count = intersections(dateline, &mut graph, &mut edges);
        if count > 0 {
            log::debug!("Polygon crosses meridian {dateline} {count} times");
        }
        merge(&mut graph, &edges, count, &mut holes)?;
    }

    let polygons = compose(&mut graph, &edges, &holes)?;
    if polygons.len() > 1 || translated {
        log::debug!(
            "Polygon is decomposed into {} parts (translated: {translated})",
            polygons.len()
        );
    }

    Ok(polygons)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use geoprep_types::cartesian::Winding;
    use geoprep_types::LinearRing;

    use super::*;
    use crate::error::InvalidShapeError;

    fn ring(coords: &[(f64, f64)]) -> LinearRing {
        let (lons, lats) = coords.iter().copied().unzip();
        LinearRing::new(lats, lons).unwrap()
    }

    fn square(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> LinearRing {
        ring(&[
            (min_x, min_y),
            (max_x, min_y),
            (max_x, max_y),
            (min_x, max_y),
            (min_x, min_y),
        ])
    }

    #[test]
    fn polygon_away_from_dateline_is_kept() {
        let polygon = Polygon::new(
            square(0.0, 0.0, 10.0, 10.0),
            vec![ring(&[(2.0, 2.0), (2.0, 4.0), (4.0, 4.0), (4.0, 2.0), (2.0, 2.0)])],
        );
        let result = decompose_polygon(&polygon, true).unwrap();
        assert_eq!(result, vec![polygon]);
    }

    #[test]
    fn wrong_winding_is_corrected() {
        let cw = ring(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0), (0.0, 0.0)]);
        let result = decompose_polygon(&Polygon::from(cw), true).unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].shell(), &square(0.0, 0.0, 10.0, 10.0));
        assert_eq!(result[0].shell().winding(), Winding::CounterClockwise);
    }

    #[test]
    fn polygon_over_dateline_is_split() {
        let polygon = Polygon::from(square(170.0, -10.0, 190.0, 10.0));
        let result = decompose_polygon(&polygon, true).unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(
            result[0].shell(),
            &ring(&[
                (170.0, -10.0),
                (180.0, -10.0),
                (180.0, 10.0),
                (170.0, 10.0),
                (170.0, -10.0)
            ])
        );
        assert_eq!(
            result[1].shell(),
            &ring(&[
                (-170.0, -10.0),
                (-170.0, 10.0),
                (-180.0, 10.0),
                (-180.0, -10.0),
                (-170.0, -10.0)
            ])
        );
        assert!(result
            .iter()
            .all(|p| p.shell().winding() == Winding::CounterClockwise));
    }

    #[test]
    fn clockwise_shell_around_dateline_is_translated() {
        let polygon = Polygon::from(ring(&[
            (170.0, -10.0),
            (-170.0, -10.0),
            (-170.0, 10.0),
            (170.0, 10.0),
            (170.0, -10.0),
        ]));
        let result = decompose_polygon(&polygon, true).unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].shell().lons(), &[170.0, 180.0, 180.0, 170.0, 170.0]);
        assert_eq!(
            result[1].shell().lons(),
            &[-170.0, -170.0, -180.0, -180.0, -170.0]
        );
    }

    #[test]
    fn hole_stays_with_its_part() {
        let polygon = Polygon::new(
            square(170.0, -10.0, 190.0, 10.0),
            vec![square(172.0, -2.0, 174.0, 2.0)],
        );
        let result = decompose_polygon(&polygon, true).unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].num_holes(), 1);
        assert_eq!(result[1].num_holes(), 0);
        assert_eq!(result[0].hole(0).winding(), Winding::Clockwise);
    }

    #[test]
    fn hole_outside_of_shell() {
        let polygon = Polygon::new(
            square(0.0, 0.0, 10.0, 10.0),
            vec![square(20.0, 2.0, 22.0, 4.0)],
        );
        assert_matches!(
            decompose_polygon(&polygon, true),
            Err(GeoprepError::InvalidShape(
                InvalidShapeError::HoleNotWithinPolygon
            ))
        );
    }

    #[test]
    fn hole_south_of_shell() {
        let polygon = Polygon::new(
            square(0.0, 0.0, 10.0, 10.0),
            vec![square(2.0, -20.0, 4.0, -18.0)],
        );
        assert_matches!(
            decompose_polygon(&polygon, true),
            Err(GeoprepError::InvalidShape(
                InvalidShapeError::HoleNotWithinPolygon
            ))
        );
    }
}
