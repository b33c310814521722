//! The area calculator built on top of the symbolic and numerical modules.
/// integration bounds derived from the intersections or set by the user
pub mod bounds;
/// sampled curves and the shaded region for a chart
pub mod plot_data;
/// explicit session object holding the interactive state
pub mod session;
/// step by step narrative of the solution
pub mod steps;
/// sample x-values with the outputs of f and g
pub mod table;
/// session configuration read from a task document
pub mod task;
