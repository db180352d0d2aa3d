//! Built-in visualization type descriptors.
//!
//! Each visualization is a marker component the host rendering layer maps
//! to its concrete chart implementation; the catalog only carries the
//! descriptor.

use timber_extension_api::{Component, VisualizationDescriptor};

pub const BAR: &str = "bar";
pub const LINE: &str = "line";
pub const WORLD_MAP: &str = "map";
pub const PIE: &str = "pie";
pub const DATA_TABLE: &str = "table";
pub const NUMBER: &str = "numeric";
pub const SCATTER: &str = "scatter";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BarVisualization;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LineVisualization;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WorldMapVisualization;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PieVisualization;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DataTable;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NumberVisualization;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScatterVisualization;

/// The built-in visualization descriptors, in picker order.
#[must_use]
pub fn descriptors() -> Vec<VisualizationDescriptor> {
    vec![
        VisualizationDescriptor {
            kind: BAR,
            display_name: "Bar Chart",
            component: Component::new(BarVisualization),
            condition: None,
        },
        VisualizationDescriptor {
            kind: LINE,
            display_name: "Line Chart",
            component: Component::new(LineVisualization),
            condition: None,
        },
        VisualizationDescriptor {
            kind: WORLD_MAP,
            display_name: "World Map",
            component: Component::new(WorldMapVisualization),
            condition: None,
        },
        VisualizationDescriptor {
            kind: PIE,
            display_name: "Pie Chart",
            component: Component::new(PieVisualization),
            condition: None,
        },
        VisualizationDescriptor {
            kind: DATA_TABLE,
            display_name: "Data Table",
            component: Component::new(DataTable),
            condition: None,
        },
        VisualizationDescriptor {
            kind: NUMBER,
            display_name: "Single Number",
            component: Component::new(NumberVisualization),
            condition: None,
        },
        VisualizationDescriptor {
            kind: SCATTER,
            display_name: "Scatter Plot",
            component: Component::new(ScatterVisualization),
            condition: None,
        },
    ]
}
