pub mod image_io;
pub mod points_file;
pub mod raw;

pub use image_io::load_slice_stack;
pub use points_file::{read_points, write_points, PointData, PointsFile};
pub use raw::{load_raw_volume, ByteOrder, RawVolumeSpec, SampleType};
