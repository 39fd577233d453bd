pub mod ircore;
