mod int8_test;
