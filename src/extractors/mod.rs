pub mod div_images;
