//! The end-to-end transpose operation.

use log::{debug, info};

use regrid_core::{geometry::Point, item::Movable};

use crate::{
    config::TransposeConfig,
    error::TransposeError,
    grid::{
        Axis, Cell, CellAssignment, GridShape, TransposePlan, assign, bounds, cluster, pitch,
        reposition::{self, Move},
        transpose,
    },
};

/// Where one item goes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    index: usize,
    cell: Cell,
    start: Point,
    target: Point,
}

impl Placement {
    /// Index of the item in the selection
    pub fn index(&self) -> usize {
        self.index
    }

    /// Cell in the original grid
    pub fn cell(&self) -> Cell {
        self.cell
    }

    /// Cell in the transposed grid
    pub fn transposed_cell(&self) -> Cell {
        self.cell.transposed()
    }

    /// Top-left corner when the plan was made
    pub fn start(&self) -> Point {
        self.start
    }

    /// Top-left corner after the transpose
    pub fn target(&self) -> Point {
        self.target
    }
}

/// A fully validated transpose, ready to apply.
#[derive(Debug, Clone)]
pub struct Plan {
    columns: Vec<f32>,
    rows: Vec<f32>,
    transpose: TransposePlan,
    assignment: CellAssignment,
    placements: Vec<Placement>,
}

impl Plan {
    /// Column centers of the original grid, ascending
    pub fn columns(&self) -> &[f32] {
        &self.columns
    }

    /// Row centers of the original grid, topmost first
    pub fn rows(&self) -> &[f32] {
        &self.rows
    }

    pub fn shape(&self) -> GridShape {
        self.transpose.shape()
    }

    pub fn transpose(&self) -> &TransposePlan {
        &self.transpose
    }

    pub fn assignment(&self) -> &CellAssignment {
        &self.assignment
    }

    /// One placement per item, in selection order
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    fn moves(&self) -> Vec<Move> {
        self.placements
            .iter()
            .map(|placement| Move::new(placement.index, placement.target))
            .collect()
    }
}

/// Outcome of a successful [`Transposer::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    moved: usize,
    shape: GridShape,
}

impl Summary {
    /// Number of items repositioned
    pub fn moved(&self) -> usize {
        self.moved
    }

    /// Shape of the grid before the transpose
    pub fn original_shape(&self) -> GridShape {
        self.shape
    }

    /// Shape of the grid after the transpose
    pub fn transposed_shape(&self) -> GridShape {
        self.shape.transposed()
    }
}

/// Reconstructs the grid formed by a selection and transposes it.
///
/// # Examples
///
/// ```rust
/// use regrid::{Transposer, config::TransposeConfig};
/// use regrid_core::{geometry::Point, scene::Shape};
///
/// let mut items = vec![
///     Shape::new("a", 0.0, 50.0, 10.0, 10.0),
///     Shape::new("b", 100.0, 50.0, 10.0, 10.0),
///     Shape::new("c", 200.0, 50.0, 10.0, 10.0),
/// ];
///
/// let transposer = Transposer::new(TransposeConfig::default());
/// let summary = transposer.apply(&mut items).expect("Failed to transpose");
///
/// assert_eq!(summary.moved(), 3);
/// assert_eq!(items[2].position(), Point::new(0.0, -150.0));
/// ```
#[derive(Debug, Default)]
pub struct Transposer {
    config: TransposeConfig,
}

impl Transposer {
    /// Create a new transposer with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Tolerances, clustering policy and anchor
    pub fn new(config: TransposeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TransposeConfig {
        &self.config
    }

    /// Analyse `items` and compute where each one goes, without moving anything.
    ///
    /// # Errors
    ///
    /// Returns any [`TransposeError`] except a failed move.
    pub fn plan<T: Movable>(&self, items: &[T]) -> Result<Plan, TransposeError> {
        self.config.validate()?;

        info!(items = items.len(); "Reading item positions");
        let positions = bounds::read_positions(items)?;

        let policy = self.config.cluster_policy();
        let columns = cluster::cluster_centers(
            &bounds::axis_values(&positions, Axis::Horizontal),
            self.config.tolerance(Axis::Horizontal),
            policy,
        );
        let mut rows = cluster::cluster_centers(
            &bounds::axis_values(&positions, Axis::Vertical),
            self.config.tolerance(Axis::Vertical),
            policy,
        );
        debug!(columns:?, rows:?; "Clustered grid lines");

        let shape = GridShape::new(rows.len(), columns.len());
        if shape.is_single_cell() {
            return Err(TransposeError::SingleCell);
        }

        let column_pitch = pitch::estimate(&columns);
        let row_pitch = pitch::estimate(&rows);
        let origin = transpose::origin(self.config.anchor(), &columns, &rows);

        // Larger y is higher up, so the topmost row comes first.
        rows.reverse();
        let assignment = assign::assign(&positions, &columns, &rows)?;

        let transpose = transpose::plan(shape, column_pitch, row_pitch, origin)?;
        info!(
            shape:% = shape,
            column_pitch,
            row_pitch;
            "Grid reconstructed"
        );

        let placements = assignment
            .iter()
            .map(|(index, cell)| Placement {
                index,
                cell,
                start: positions[index],
                target: transpose.target(cell),
            })
            .collect();

        Ok(Plan {
            columns,
            rows,
            transpose,
            assignment,
            placements,
        })
    }

    /// Transpose the grid formed by `items`, moving them in place.
    ///
    /// Either every item is moved or, on error, none is left moved.
    ///
    /// # Errors
    ///
    /// Returns [`TransposeError`] if the selection does not form a grid that
    /// can be transposed, or if the host fails to measure or move an item.
    pub fn apply<T: Movable>(&self, items: &mut [T]) -> Result<Summary, TransposeError> {
        let plan = self.plan(items)?;

        let moved = reposition::apply(items, &plan.moves())?;
        info!(
            moved,
            transposed:% = plan.shape().transposed();
            "Grid transposed"
        );

        Ok(Summary {
            moved,
            shape: plan.shape(),
        })
    }
}

#[cfg(test)]
mod tests {
    use regrid_core::{geometry::Bounds, item::ItemError, scene::Shape};

    use super::*;
    use crate::config::Anchor;

    /// A host that passes its stored corner through without validation.
    #[derive(Debug, Clone, Copy, PartialEq)]
    struct RawHost(Point);

    impl Movable for RawHost {
        fn bounds(&self) -> Result<Bounds, ItemError> {
            Ok(Bounds::new(self.0.x(), self.0.y(), 10.0, 10.0))
        }

        fn translate_by(&mut self, delta: Point) -> Result<(), ItemError> {
            self.0 = Point::new(self.0.x() + delta.x(), self.0.y() + delta.y());
            Ok(())
        }
    }

    fn two_by_three() -> Vec<Shape> {
        vec![
            Shape::new("r0c0", 0.0, 100.0, 10.0, 10.0),
            Shape::new("r0c1", 100.0, 100.0, 10.0, 10.0),
            Shape::new("r0c2", 200.0, 100.0, 10.0, 10.0),
            Shape::new("r1c0", 0.0, 0.0, 10.0, 10.0),
            Shape::new("r1c1", 100.0, 0.0, 10.0, 10.0),
            Shape::new("r1c2", 200.0, 0.0, 10.0, 10.0),
        ]
    }

    #[test]
    fn test_plan_does_not_move_items() {
        let items = two_by_three();
        let before = items.clone();

        let plan = Transposer::default().plan(&items).unwrap();

        assert_eq!(items, before);
        assert_eq!(plan.shape(), GridShape::new(2, 3));
        assert_eq!(plan.columns(), &[0.0, 100.0, 200.0]);
        assert_eq!(plan.rows(), &[100.0, 0.0]);
        assert_eq!(plan.placements().len(), 6);
    }

    #[test]
    fn test_placements_follow_transposed_cells() {
        let plan = Transposer::default().plan(&two_by_three()).unwrap();
        let placement = plan.placements()[5];

        assert_eq!(placement.cell(), Cell::new(1, 2));
        assert_eq!(placement.transposed_cell(), Cell::new(2, 1));
        assert_eq!(placement.start(), Point::new(200.0, 0.0));
        assert_eq!(placement.target(), Point::new(100.0, -200.0));
    }

    #[test]
    fn test_top_left_anchor_keeps_visual_corner() {
        let transposer =
            Transposer::new(TransposeConfig::default().with_anchor(Anchor::TopLeft));
        let mut items = two_by_three();

        transposer.apply(&mut items).unwrap();

        assert_eq!(items[0].position(), Point::new(0.0, 100.0));
        assert_eq!(items[2].position(), Point::new(0.0, -100.0));
        assert_eq!(items[5].position(), Point::new(100.0, -100.0));
    }

    #[test]
    fn test_apply_reads_positions_at_move_time() {
        let mut items = two_by_three();
        let plan = Transposer::default().plan(&items).unwrap();

        // The host nudges an item after planning.
        items[5].translate_by(Point::new(7.0, -3.0)).unwrap();

        reposition::apply(&mut items, &plan.moves()).unwrap();

        for placement in plan.placements() {
            assert_eq!(items[placement.index()].position(), placement.target());
        }
    }

    #[test]
    fn test_non_finite_host_bounds_abort_before_moving() {
        let mut items = vec![
            RawHost(Point::new(0.0, 0.0)),
            RawHost(Point::new(100.0, 0.0)),
            RawHost(Point::new(200.0, 0.0)),
            RawHost(Point::new(300.0, 0.0)),
            RawHost(Point::new(f32::NAN, 100.0)),
        ];
        let before = items.clone();

        let err = Transposer::default().apply(&mut items).unwrap_err();

        assert!(matches!(err, TransposeError::Item { index: 4, .. }));
        assert_eq!(&items[..4], &before[..4]);
        assert!(items[4].0.x().is_nan());
    }

    #[test]
    fn test_non_finite_host_bounds_are_not_reported_as_collision() {
        let items = vec![
            RawHost(Point::new(0.0, 0.0)),
            RawHost(Point::new(100.0, 0.0)),
            RawHost(Point::new(f32::NAN, 0.0)),
        ];

        assert!(matches!(
            Transposer::default().plan(&items),
            Err(TransposeError::Item { index: 2, .. })
        ));
    }

    #[test]
    fn test_invalid_tolerance_is_reported_first() {
        let transposer = Transposer::new(TransposeConfig::new(-1.0, 8.0));
        let none: Vec<Shape> = Vec::new();

        assert!(matches!(
            transposer.plan(&none),
            Err(TransposeError::InvalidTolerance {
                axis: Axis::Horizontal,
                ..
            })
        ));
    }
}

#[cfg(test)]
mod proptest_tests {
    use std::collections::BTreeSet;

    use proptest::prelude::*;

    use regrid_core::scene::Shape;

    use super::*;

    /// A jittered `rows x cols` lattice with its dimensions and a per-cell keep mask.
    #[derive(Debug, Clone)]
    struct Lattice {
        rows: usize,
        cols: usize,
        items: Vec<Shape>,
        keep: Vec<bool>,
    }

    fn lattice_strategy() -> impl Strategy<Value = Lattice> {
        (2usize..6, 2usize..6, 20.0f32..200.0, 20.0f32..200.0).prop_flat_map(
            |(rows, cols, pitch_x, pitch_y)| {
                let cells = rows * cols;
                (
                    prop::collection::vec((-2.0f32..2.0, -2.0f32..2.0), cells),
                    prop::collection::vec(any::<bool>(), cells),
                )
                    .prop_map(move |(jitter, keep)| {
                        let items = jitter
                            .into_iter()
                            .enumerate()
                            .map(|(i, (jx, jy))| {
                                let (row, col) = (i / cols, i % cols);
                                Shape::new(
                                    format!("r{row}c{col}"),
                                    col as f32 * pitch_x + jx,
                                    -(row as f32) * pitch_y + jy,
                                    10.0,
                                    10.0,
                                )
                            })
                            .collect();
                        Lattice {
                            rows,
                            cols,
                            items,
                            keep,
                        }
                    })
            },
        )
    }

    fn distinct(values: impl Iterator<Item = usize>) -> usize {
        values.collect::<BTreeSet<_>>().len()
    }

    /// A full `R x C` grid becomes `C x R`.
    fn check_shape_swap(lattice: Lattice) -> Result<(), TestCaseError> {
        let mut items = lattice.items;
        let transposer = Transposer::default();

        let plan = transposer
            .plan(&items)
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        let new_rows = distinct(plan.placements().iter().map(|p| p.transposed_cell().row()));
        let new_cols = distinct(plan.placements().iter().map(|p| p.transposed_cell().col()));
        prop_assert_eq!(new_rows, lattice.cols);
        prop_assert_eq!(new_cols, lattice.rows);

        let summary = transposer
            .apply(&mut items)
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        prop_assert_eq!(summary.transposed_shape(), GridShape::new(lattice.cols, lattice.rows));

        let replanned = transposer
            .plan(&items)
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        prop_assert_eq!(replanned.shape(), GridShape::new(lattice.cols, lattice.rows));
        Ok(())
    }

    /// Sparse grids keep every item and never stack two on one spot.
    fn check_count_preserved(lattice: Lattice) -> Result<(), TestCaseError> {
        let mut items: Vec<Shape> = lattice
            .items
            .into_iter()
            .zip(lattice.keep)
            .filter_map(|(item, keep)| keep.then_some(item))
            .collect();
        prop_assume!(items.len() >= 2);
        let count = items.len();

        let summary = Transposer::default()
            .apply(&mut items)
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        prop_assert_eq!(summary.moved(), count);
        prop_assert_eq!(items.len(), count);

        for (i, a) in items.iter().enumerate() {
            for b in &items[i + 1..] {
                prop_assert_ne!(a.position(), b.position());
            }
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn shape_swap(lattice in lattice_strategy()) {
            check_shape_swap(lattice)?;
        }

        #[test]
        fn count_preserved(lattice in lattice_strategy()) {
            check_count_preserved(lattice)?;
        }
    }
}
