pub mod binop;
