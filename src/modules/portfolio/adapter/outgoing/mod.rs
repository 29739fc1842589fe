pub mod gviz;
