mod bit_width_test;
mod sampling_test;
mod tensor_test;
