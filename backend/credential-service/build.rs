// Build script for credential-service
// Compiles credential_service.proto for gRPC server code generation
fn main() {
    println!("cargo:rerun-if-changed=../proto/services/credential_service.proto");

    tonic_build::configure()
        .build_server(true)
        .build_client(false)
        .compile_protos(
            &["../proto/services/credential_service.proto"],
            &["../proto/services"],
        )
        .expect("Failed to compile credential_service.proto for credential-service");
}
