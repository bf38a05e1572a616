fn main() {
    condominio_web::run();
}
