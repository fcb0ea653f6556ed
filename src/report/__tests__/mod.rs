mod artifact_test;
mod sink_test;
