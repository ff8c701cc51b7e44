pub mod d400_village_dashboard;
