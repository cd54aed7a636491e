#[cfg(test)]
mod tests {
    use pcbplace::entities::{Board, ComponentSpec, PlacedComponent, Placement};
    use pcbplace::generators::{
        PairOrientation, centered_position, generate_edge_placements, generate_mirrored_pairs,
        grid_positions, offsets_within,
    };
    use pcbplace::geometry::geo_enums::Rotation;
    use pcbplace::geometry::primitives::Point;
    use test_case::test_case;

    fn board() -> Board {
        Board::try_new(50.0, 50.0).unwrap()
    }

    fn spec(id: usize, width: f64, height: f64) -> ComponentSpec {
        ComponentSpec {
            id,
            name: format!("C{id}"),
            width,
            height,
        }
    }

    fn placement(comp_id: usize, x: f64, y: f64, rotation: Rotation) -> Placement {
        Placement {
            comp_id,
            position: Point(x, y),
            rotation,
        }
    }

    #[test_case(-1.0, 1.0, vec![]; "negative extent")]
    #[test_case(0.0, 1.0, vec![0.0]; "zero extent")]
    #[test_case(2.5, 1.0, vec![0.0, 1.0, 2.0]; "fractional extent")]
    #[test_case(1.5, 0.5, vec![0.0, 0.5, 1.0, 1.5]; "fractional step")]
    fn grid(extent: f64, step: f64, expected: Vec<f64>) {
        assert_eq!(grid_positions(extent, step).collect::<Vec<_>>(), expected);
    }

    #[test]
    fn mirrored_pairs_order() {
        let (mb1, mb2) = (spec(1, 5.0, 15.0), spec(2, 5.0, 15.0));
        let pairs = generate_mirrored_pairs(&board(), &mb1, &mb2, 1.0);

        assert_eq!(pairs.len(), 36 + 36);
        assert!(pairs[..36].iter().all(|p| p.orientation == PairOrientation::Vertical));
        assert!(pairs[36..].iter().all(|p| p.orientation == PairOrientation::Horizontal));

        assert_eq!(
            pairs[0].twins,
            [
                placement(1, 0.0, 0.0, Rotation::Deg0),
                placement(2, 45.0, 0.0, Rotation::Deg0)
            ]
        );
        assert_eq!(
            pairs[35].twins,
            [
                placement(1, 0.0, 35.0, Rotation::Deg0),
                placement(2, 45.0, 35.0, Rotation::Deg0)
            ]
        );
        assert_eq!(
            pairs[36].twins,
            [
                placement(1, 0.0, 0.0, Rotation::Deg90),
                placement(2, 0.0, 45.0, Rotation::Deg90)
            ]
        );
        assert_eq!(
            pairs[71].twins,
            [
                placement(1, 35.0, 0.0, Rotation::Deg90),
                placement(2, 35.0, 45.0, Rotation::Deg90)
            ]
        );
    }

    #[test]
    fn mirrored_twins_are_symmetric() {
        let b = board();
        let (mb1, mb2) = (spec(0, 5.0, 15.0), spec(1, 5.0, 15.0));
        for pair in generate_mirrored_pairs(&b, &mb1, &mb2, 1.0) {
            let ca = PlacedComponent::new(&mb1, pair.twins[0]).unwrap().center();
            let cb = PlacedComponent::new(&mb2, pair.twins[1]).unwrap().center();
            match pair.orientation {
                PairOrientation::Vertical => {
                    assert_eq!(ca.x() + cb.x(), b.width);
                    assert_eq!(ca.y(), cb.y());
                }
                PairOrientation::Horizontal => {
                    assert_eq!(ca.y() + cb.y(), b.height);
                    assert_eq!(ca.x(), cb.x());
                }
            }
        }
    }

    #[test]
    fn mirrored_pairs_too_large() {
        let b = Board::try_new(12.0, 12.0).unwrap();
        let (mb1, mb2) = (spec(0, 5.0, 15.0), spec(1, 5.0, 15.0));
        assert!(generate_mirrored_pairs(&b, &mb1, &mb2, 1.0).is_empty());
    }

    #[test]
    fn edge_placements_order() {
        let usb = spec(0, 5.0, 5.0);
        let placements = generate_edge_placements(&board(), &usb, 1.0);

        assert_eq!(placements.len(), 2 * 46 + 2 * 46);
        assert_eq!(placements[0], placement(0, 0.0, 0.0, Rotation::Deg0));
        assert_eq!(placements[1], placement(0, 0.0, 45.0, Rotation::Deg0));
        assert_eq!(placements[2], placement(0, 1.0, 0.0, Rotation::Deg0));
        assert_eq!(placements[91], placement(0, 45.0, 45.0, Rotation::Deg0));
        assert_eq!(placements[92], placement(0, 0.0, 0.0, Rotation::Deg90));
        assert_eq!(placements[93], placement(0, 45.0, 0.0, Rotation::Deg90));
        assert_eq!(placements[183], placement(0, 45.0, 45.0, Rotation::Deg90));
    }

    #[test]
    fn edge_placements_of_rectangular_footprint() {
        let b = board();
        let conn = spec(0, 4.0, 10.0);
        let placements = generate_edge_placements(&b, &conn, 1.0);

        //upright: x in 0..=46, rotated (10 wide, 4 high): y in 0..=46
        assert_eq!(placements.len(), 2 * 47 + 2 * 47);
        assert_eq!(placements[1], placement(0, 0.0, 40.0, Rotation::Deg0));
        assert_eq!(placements[95], placement(0, 40.0, 0.0, Rotation::Deg90));

        for p in placements {
            let pc = PlacedComponent::new(&conn, p).unwrap();
            assert!(b.contains(&pc.bbox), "{:?} leaves the board", p);
            assert!(b.touched_sides(&pc.bbox, 1e-6).next().is_some(), "{:?} touches no side", p);
        }
    }

    #[test]
    fn offsets_within_radius() {
        let offsets = offsets_within(10);
        assert_eq!(offsets.len(), 317);
        assert_eq!(offsets.first(), Some(&(-10, 0)));
        assert_eq!(offsets.last(), Some(&(10, 0)));
        assert!(offsets.contains(&(0, 0)));
        assert!(offsets.contains(&(6, 8)));
        assert!(!offsets.contains(&(7, 8)));

        assert_eq!(offsets_within(0), vec![(0, 0)]);
        assert_eq!(
            offsets_within(1),
            vec![(-1, 0), (0, -1), (0, 0), (0, 1), (1, 0)]
        );
    }

    #[test_case(Point(25.0, 25.0), 5.0, 5.0, Point(23.0, 23.0); "odd footprint")]
    #[test_case(Point(25.0, 25.0), 4.0, 6.0, Point(23.0, 22.0); "even footprint")]
    #[test_case(Point(32.5, 32.5), 5.0, 5.0, Point(30.0, 30.0); "fractional target")]
    #[test_case(Point(1.0, 1.0), 5.0, 5.0, Point(-1.0, -1.0); "near the origin")]
    fn centered(target: Point, width: f64, height: f64, expected: Point) {
        assert_eq!(centered_position(target, width, height), expected);
    }
}
