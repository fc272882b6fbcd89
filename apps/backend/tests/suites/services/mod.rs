pub mod sequence_service;
