pub mod pbm;
pub mod pnm;
