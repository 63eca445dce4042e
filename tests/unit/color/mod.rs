mod palette;
mod quantize;
