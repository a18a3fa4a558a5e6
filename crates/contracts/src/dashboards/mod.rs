pub mod d400_consultation_stats;
