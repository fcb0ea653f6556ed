mod safetensors_model_test;
