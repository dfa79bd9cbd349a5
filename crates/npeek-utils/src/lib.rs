pub mod package_spec;

pub use package_spec::{PackageSpec, parse_package_spec};
