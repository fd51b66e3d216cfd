use linear84::{Codeword, CODEBOOK};

fn main() {
    // All bits set, one bit away from the codeword for 14
    let received = Codeword::from_bits(0xFF);
    let info = CODEBOOK.decode(received);
    println!("{}", info);
}
