pub mod transport_funcs;
