//! Fixed step tables shared by the move generators and the attack detector.

/// `(d_row, d_col)` steps.
pub type Step = (i8, i8);

pub const KNIGHT_STEPS: [Step; 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub const ORTHOGONAL_DIRECTIONS: [Step; 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub const DIAGONAL_DIRECTIONS: [Step; 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub const KING_STEPS: [Step; 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn king_steps_are_the_union_of_both_ray_sets() {
        let mut rays: Vec<Step> = ORTHOGONAL_DIRECTIONS
            .iter()
            .chain(DIAGONAL_DIRECTIONS.iter())
            .copied()
            .collect();
        rays.sort();
        let mut king = KING_STEPS.to_vec();
        king.sort();
        assert_eq!(rays, king);
    }
}
