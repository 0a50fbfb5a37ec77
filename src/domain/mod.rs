pub mod duration_sample;
pub mod path_frame;
pub mod scenario;
pub mod simulation_request;
pub mod simulation_result;
