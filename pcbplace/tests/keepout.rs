#[cfg(test)]
mod tests {
    use pcbplace::entities::{
        Board, ComponentSpec, KeepoutShape, KeepoutZone, PlacedComponent, Placement,
    };
    use pcbplace::geometry::geo_enums::{BoardSide, Rotation};
    use pcbplace::geometry::primitives::{Point, Rect};
    use test_case::test_case;

    fn board() -> Board {
        Board::try_new(50.0, 50.0).unwrap()
    }

    fn placed(x: f64, y: f64, width: f64, height: f64, rotation: Rotation) -> PlacedComponent {
        let spec = ComponentSpec {
            id: 0,
            name: "USB".to_string(),
            width,
            height,
        };
        let placement = Placement {
            comp_id: 0,
            position: Point(x, y),
            rotation,
        };
        PlacedComponent::new(&spec, placement).unwrap()
    }

    fn rect(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Rect {
        Rect::try_new(x_min, y_min, x_max, y_max).unwrap()
    }

    #[test_case(10.0, 0.0, BoardSide::Top, rect(10.0, 0.0, 15.0, 15.0); "top")]
    #[test_case(6.0, 45.0, BoardSide::Bottom, rect(6.0, 35.0, 11.0, 50.0); "bottom")]
    #[test_case(0.0, 20.0, BoardSide::Left, rect(0.0, 20.0, 15.0, 25.0); "left")]
    #[test_case(45.0, 20.0, BoardSide::Right, rect(35.0, 20.0, 50.0, 25.0); "right")]
    #[test_case(0.0, 0.0, BoardSide::Top, rect(0.0, 0.0, 5.0, 15.0); "top left corner")]
    #[test_case(45.0, 0.0, BoardSide::Top, rect(45.0, 0.0, 50.0, 15.0); "top right corner")]
    #[test_case(0.0, 45.0, BoardSide::Bottom, rect(0.0, 35.0, 5.0, 50.0); "bottom left corner")]
    #[test_case(45.0, 45.0, BoardSide::Bottom, rect(45.0, 35.0, 50.0, 50.0); "bottom right corner")]
    fn keepout_per_side(x: f64, y: f64, side: BoardSide, expected: Rect) {
        let usb = placed(x, y, 5.0, 5.0, Rotation::Deg0);
        let keepout = KeepoutZone::derive(&board(), &usb, KeepoutShape::default()).unwrap();
        assert_eq!(keepout.owner, 0);
        assert_eq!(keepout.side, side);
        assert_eq!(keepout.rect, expected);
    }

    #[test]
    fn keepout_of_rotated_component() {
        //a 5x15 footprint rotated against the top side is 15 wide
        let comp = placed(20.0, 0.0, 5.0, 15.0, Rotation::Deg90);
        let keepout = KeepoutZone::derive(&board(), &comp, KeepoutShape::default()).unwrap();
        assert_eq!(keepout.side, BoardSide::Top);
        assert_eq!(keepout.rect, rect(25.0, 0.0, 30.0, 15.0));
    }

    #[test]
    fn keepout_is_clipped_to_the_board() {
        let wide = KeepoutShape {
            width: 10.0,
            depth: 15.0,
        };
        let usb = placed(0.0, 0.0, 5.0, 5.0, Rotation::Deg0);
        let keepout = KeepoutZone::derive(&board(), &usb, wide).unwrap();
        assert_eq!(keepout.rect, rect(0.0, 0.0, 7.5, 15.0));

        let deep = KeepoutShape {
            width: 5.0,
            depth: 80.0,
        };
        let usb = placed(20.0, 45.0, 5.0, 5.0, Rotation::Deg0);
        let keepout = KeepoutZone::derive(&board(), &usb, deep).unwrap();
        assert_eq!(keepout.rect, rect(20.0, 0.0, 25.0, 50.0));
    }

    #[test]
    fn keepout_within_touch_tolerance() {
        let usb = placed(10.0, 1e-7, 5.0, 5.0, Rotation::Deg0);
        let keepout = KeepoutZone::derive(&board(), &usb, KeepoutShape::default()).unwrap();
        assert_eq!(keepout.side, BoardSide::Top);

        let usb = placed(10.0, 1e-3, 5.0, 5.0, Rotation::Deg0);
        assert!(KeepoutZone::derive(&board(), &usb, KeepoutShape::default()).is_err());
    }

    #[test]
    fn keepout_requires_an_edge() {
        let usb = placed(20.0, 20.0, 5.0, 5.0, Rotation::Deg0);
        assert!(KeepoutZone::derive(&board(), &usb, KeepoutShape::default()).is_err());
    }

    #[test]
    fn keepout_requires_positive_shape() {
        let usb = placed(0.0, 0.0, 5.0, 5.0, Rotation::Deg0);
        let flat = KeepoutShape {
            width: 5.0,
            depth: 0.0,
        };
        assert!(KeepoutZone::derive(&board(), &usb, flat).is_err());
    }

    #[test]
    fn touched_sides_follow_priority() {
        let b = board();
        let corner = rect(45.0, 45.0, 50.0, 50.0);
        let sides = b.touched_sides(&corner, 1e-6).collect::<Vec<_>>();
        assert_eq!(sides, vec![BoardSide::Bottom, BoardSide::Right]);

        let spanning = rect(0.0, 0.0, 50.0, 50.0);
        let sides = b.touched_sides(&spanning, 1e-6).collect::<Vec<_>>();
        assert_eq!(sides, BoardSide::PRIORITY.to_vec());
    }
}
