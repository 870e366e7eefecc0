use broadside::{GameError, Orientation, Ship, ShipClass};

#[test]
fn test_cells_and_contains() {
    let class = ShipClass::new("Test", 4);
    let ship = Ship::new(class, Orientation::Vertical, 2, 7).unwrap();
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(cells, vec![(2, 7), (3, 7), (4, 7), (5, 7)]);
    for (r, c) in cells {
        assert!(ship.contains(r, c));
    }
    assert!(!ship.contains(6, 7));
    assert!(!ship.contains(2, 6));
}

#[test]
fn test_register_hit_and_sunk() {
    let class = ShipClass::new("Test", 2);
    let mut ship = Ship::new(class, Orientation::Horizontal, 1, 1).unwrap();
    assert!(!ship.is_sunk());
    assert!(ship.register_hit(1, 1));
    assert_eq!(ship.hit_count(), 1);
    assert!(!ship.is_sunk());
    assert!(ship.register_hit(1, 2));
    assert!(ship.is_sunk());
    // miss does not count
    let mut other = Ship::new(class, Orientation::Horizontal, 1, 1).unwrap();
    assert!(!other.register_hit(0, 0));
    assert_eq!(other.hit_count(), 0);
}

#[test]
fn test_out_of_bounds_rejected() {
    let class = ShipClass::new("Test", 5);
    assert_eq!(
        Ship::new(class, Orientation::Horizontal, 0, 6).unwrap_err(),
        GameError::ShipOutOfBounds
    );
    assert_eq!(
        Ship::new(class, Orientation::Vertical, 6, 0).unwrap_err(),
        GameError::ShipOutOfBounds
    );
    assert_eq!(
        Ship::new(class, Orientation::Horizontal, 10, 0).unwrap_err(),
        GameError::ShipOutOfBounds
    );
    // tightest legal fits
    assert!(Ship::new(class, Orientation::Horizontal, 9, 5).is_ok());
    assert!(Ship::new(class, Orientation::Vertical, 5, 9).is_ok());
}
