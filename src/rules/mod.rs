pub mod premise;
